//! Prompt store service
//!
//! The three operations answered by the store process. Every call works on
//! the database directly; nothing is cached between calls.

use std::collections::HashMap;
use std::path::Path;

use shared::models::{Prompt, PromptCollection, Tag};

use crate::db::DbService;
use crate::db::repository::{prompt, tag};
use crate::error::{StoreError, StoreResult};

#[derive(Clone)]
pub struct PromptStore {
    db: DbService,
}

impl PromptStore {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    /// Open the database file at `db_path`
    pub async fn open(db_path: &Path) -> StoreResult<Self> {
        Ok(Self::new(DbService::new(db_path).await?))
    }

    /// In-memory store
    pub async fn in_memory() -> StoreResult<Self> {
        Ok(Self::new(DbService::in_memory().await?))
    }

    pub fn db(&self) -> &DbService {
        &self.db
    }

    /// Snapshot of all prompts (oldest first, each with its tags in saved
    /// order) and all tags (by name)
    pub async fn fetch_prompts(&self) -> StoreResult<PromptCollection> {
        let rows = prompt::find_all(&self.db.pool).await?;
        let links = prompt::find_all_tag_links(&self.db.pool).await?;
        let tags = tag::find_all(&self.db.pool).await?;

        let mut tags_by_prompt: HashMap<String, Vec<Tag>> = HashMap::new();
        for link in links {
            tags_by_prompt
                .entry(link.prompt_id)
                .or_default()
                .push(Tag::with_id(link.tag_id, link.tag_name));
        }

        let prompts = rows
            .into_iter()
            .map(|row| {
                let tags = tags_by_prompt.remove(&row.id).unwrap_or_default();
                row.into_prompt(tags)
            })
            .collect::<Vec<_>>();

        tracing::debug!(prompts = prompts.len(), tags = tags.len(), "Fetched prompts");
        Ok(PromptCollection { prompts, tags })
    }

    /// Store a new prompt and its tags in one transaction
    ///
    /// Tags are matched by name: a tag whose name is already stored is linked
    /// under the stored id, any other tag is created with the id it carries.
    pub async fn save_prompt(&self, new_prompt: Prompt) -> StoreResult<()> {
        if new_prompt.name.is_empty() {
            return Err(StoreError::Validation("Prompt name is required".into()));
        }
        if new_prompt.content.is_empty() {
            return Err(StoreError::Validation("Prompt content is required".into()));
        }

        let created_at = new_prompt
            .created_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        let mut tx = self.db.pool.begin().await?;

        prompt::insert(&mut tx, &new_prompt, created_at).await?;

        for (position, requested) in new_prompt.tags.iter().enumerate() {
            let stored = tag::get_or_create(&mut tx, requested).await?;
            prompt::link_tag(&mut tx, &new_prompt.id, &stored.id, position as i64).await?;
        }

        tx.commit().await?;

        tracing::info!(
            prompt_id = %new_prompt.id,
            tags = new_prompt.tags.len(),
            "Prompt saved"
        );
        Ok(())
    }

    /// Delete a prompt; its tags stay known
    pub async fn delete_prompt(&self, prompt_id: &str) -> StoreResult<()> {
        if !prompt::delete(&self.db.pool, prompt_id).await? {
            return Err(StoreError::NotFound(format!("Prompt {prompt_id}")));
        }
        tracing::info!(prompt_id = %prompt_id, "Prompt deleted");
        Ok(())
    }
}
