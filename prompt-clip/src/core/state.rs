//! Application root
//!
//! `PromptClip` owns the form, the last fetched collection and the creation
//! dialog, and runs the save/delete/fetch workflow against a
//! [`PromptBackend`]. Backend failures are logged and degrade to an absent
//! collection; nothing propagates out of here except form validation.

use std::sync::Arc;

use clip_client::PromptBackend;
use parking_lot::Mutex;
use shared::models::{Prompt, PromptCollection, Tag};

use super::collection::CollectionSlot;
use super::dialog::{EditDialog, Modal};
use super::form::{FormErrors, PromptForm};
use super::tags::resolve_tags;

pub const CREATE_DIALOG_TITLE: &str = "New prompt";

/// Result of a submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(Prompt),
    SaveFailed,
}

pub struct PromptClip<B> {
    backend: B,
    form: Arc<Mutex<PromptForm>>,
    collection: CollectionSlot,
    create_dialog: EditDialog,
}

impl<B: PromptBackend> PromptClip<B> {
    pub fn new(backend: B) -> Self {
        let form = Arc::new(Mutex::new(PromptForm::default()));
        let reset = Arc::clone(&form);
        Self {
            backend,
            form,
            collection: CollectionSlot::new(),
            create_dialog: EditDialog::new(CREATE_DIALOG_TITLE, move || reset.lock().reset()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ========== Form ==========

    pub fn form(&self) -> PromptForm {
        self.form.lock().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.form.lock().name = name.into();
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.form.lock().content = content.into();
    }

    pub fn set_tag_input(&self, input: impl Into<String>) {
        self.form.lock().tag_input = input.into();
    }

    /// Returns the added tag, or `None` when the tag input was empty
    pub fn add_pending_tag(&self) -> Option<Tag> {
        self.form.lock().add_pending_tag().cloned()
    }

    pub fn remove_pending_tag(&self, tag_id: &str) -> Option<Tag> {
        self.form.lock().remove_pending_tag(tag_id)
    }

    // ========== Collection ==========

    pub fn collection(&self) -> Option<PromptCollection> {
        self.collection.snapshot()
    }

    /// Prompts of the last fetch; empty when the fetch failed
    pub fn prompts(&self) -> Vec<Prompt> {
        self.collection
            .with(|c| c.map(|c| c.prompts.clone()).unwrap_or_default())
    }

    pub fn create_dialog(&self) -> &EditDialog {
        &self.create_dialog
    }

    // ========== Workflow ==========

    /// Initial fetch
    pub async fn load(&self) {
        self.refresh().await;
    }

    /// Validate, save, re-fetch and reset
    ///
    /// The form is reset and the creation dialog closed only when the save
    /// succeeded; a failed save keeps the user's input.
    pub async fn submit(&self) -> Result<SubmitOutcome, FormErrors> {
        let form = self.form();
        form.validate()?;

        let tags = self
            .collection
            .with(|known| resolve_tags(&form.pending_tags, known));
        let prompt = Prompt::new(form.name, form.content, tags);

        let saved = match self.backend.save_prompt(&prompt).await {
            Ok(()) => {
                tracing::info!(prompt_id = %prompt.id, "Prompt saved");
                true
            }
            Err(e) => {
                tracing::error!(prompt_id = %prompt.id, error = %e, "Failed to save prompt");
                false
            }
        };

        self.refresh().await;

        if saved {
            self.create_dialog.close();
            Ok(SubmitOutcome::Saved(prompt))
        } else {
            Ok(SubmitOutcome::SaveFailed)
        }
    }

    /// Delete then re-fetch; no confirmation here
    pub async fn delete_prompt(&self, prompt_id: &str) {
        match self.backend.delete_prompt(prompt_id).await {
            Ok(()) => tracing::info!(prompt_id, "Prompt deleted"),
            Err(e) => tracing::error!(prompt_id, error = %e, "Failed to delete prompt"),
        }
        self.refresh().await;
    }

    async fn refresh(&self) {
        let ticket = self.collection.begin_fetch();
        let result = match self.backend.fetch_prompts().await {
            Ok(collection) => {
                tracing::debug!(prompts = collection.prompts.len(), "Fetched prompts");
                Some(collection)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch prompts");
                None
            }
        };
        self.collection.apply(ticket, result);
    }
}

impl<B> std::fmt::Debug for PromptClip<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptClip")
            .field("form", &*self.form.lock())
            .field("collection", &self.collection)
            .field("create_dialog", &self.create_dialog)
            .finish()
    }
}
