//! Application root workflow against a scripted backend

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clip_client::{ClientError, ClientResult, PromptBackend};
use parking_lot::Mutex;
use prompt_clip::core::{ConfirmDialog, FormField, Modal, PromptClip, SubmitOutcome};
use shared::error::ErrorCode;
use shared::models::{Prompt, PromptCollection, Tag};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Save(Prompt),
    Fetch,
    Delete(String),
}

/// Records every call; answers fetches from a queue, falling back to the
/// current collection
#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    collection: Mutex<PromptCollection>,
    fetch_script: Mutex<VecDeque<ClientResult<PromptCollection>>>,
    fail_save: Mutex<bool>,
    fetch_delay: Mutex<VecDeque<Duration>>,
}

impl FakeBackend {
    fn with_collection(collection: PromptCollection) -> Self {
        Self {
            collection: Mutex::new(collection),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn fail_next_fetch(&self) {
        self.fetch_script.lock().push_back(Err(ClientError::Backend {
            code: ErrorCode::DatabaseError,
            message: "database is locked".into(),
        }));
    }

    fn saved_prompts(&self) -> Vec<Prompt> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Save(p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl PromptBackend for FakeBackend {
    async fn save_prompt(&self, prompt: &Prompt) -> ClientResult<()> {
        self.calls.lock().push(Call::Save(prompt.clone()));
        if *self.fail_save.lock() {
            return Err(ClientError::Transport("store went away".into()));
        }
        self.collection.lock().prompts.push(prompt.clone());
        Ok(())
    }

    async fn fetch_prompts(&self) -> ClientResult<PromptCollection> {
        self.calls.lock().push(Call::Fetch);
        let delay = self.fetch_delay.lock().pop_front();
        let scripted = self.fetch_script.lock().pop_front();
        let snapshot = self.collection.lock().clone();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        scripted.unwrap_or(Ok(snapshot))
    }

    async fn delete_prompt(&self, prompt_id: &str) -> ClientResult<()> {
        self.calls.lock().push(Call::Delete(prompt_id.to_string()));
        self.collection.lock().prompts.retain(|p| p.id != prompt_id);
        Ok(())
    }
}

fn known_tags() -> PromptCollection {
    PromptCollection {
        prompts: vec![],
        tags: vec![Tag::with_id("backend-work", "work")],
    }
}

fn fill_form<B: PromptBackend>(root: &PromptClip<B>, name: &str, content: &str, tags: &[&str]) {
    root.set_name(name);
    root.set_content(content);
    for tag in tags {
        root.set_tag_input(*tag);
        root.add_pending_tag();
    }
}

#[tokio::test]
async fn test_known_tag_names_reuse_backend_ids() {
    let root = PromptClip::new(FakeBackend::with_collection(known_tags()));
    root.load().await;

    fill_form(&root, "Greeting", "Hello {name}", &["work", "urgent"]);
    let urgent_id = root.form().pending_tags[1].id.clone();

    let outcome = root.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Saved(_)));

    let saved = root.backend().saved_prompts();
    assert_eq!(saved.len(), 1);
    let tags = &saved[0].tags;
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0], Tag::with_id("backend-work", "work"));
    // Unknown names keep the client-generated id
    assert_eq!(tags[1].name, "urgent");
    assert_eq!(tags[1].id, urgent_id);
}

#[tokio::test]
async fn test_submit_saves_refetches_and_resets() {
    let root = PromptClip::new(FakeBackend::default());
    root.load().await;
    root.create_dialog().open();

    fill_form(&root, "Greeting", "Hello {name}", &["work", "urgent"]);
    root.submit().await.unwrap();

    let calls = root.backend().calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Call::Fetch);
    let Call::Save(prompt) = &calls[1] else {
        panic!("expected a save, got {:?}", calls[1]);
    };
    assert_eq!(prompt.name, "Greeting");
    assert_eq!(prompt.content, "Hello {name}");
    let names: Vec<_> = prompt.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["work", "urgent"]);
    assert_eq!(calls[2], Call::Fetch);

    assert_eq!(root.form(), Default::default());
    assert!(!root.create_dialog().is_open());
    assert_eq!(root.prompts().len(), 1);
}

#[tokio::test]
async fn test_form_resets_even_when_refetch_fails() {
    let root = PromptClip::new(FakeBackend::default());
    root.load().await;
    root.backend().fail_next_fetch();

    fill_form(&root, "Greeting", "Hello", &[]);
    root.submit().await.unwrap();

    assert_eq!(root.form(), Default::default());
    assert!(root.collection().is_none());
    assert!(root.prompts().is_empty());
}

#[tokio::test]
async fn test_failed_save_keeps_form_and_still_refetches() {
    let backend = FakeBackend::default();
    *backend.fail_save.lock() = true;
    let root = PromptClip::new(backend);
    root.create_dialog().open();

    fill_form(&root, "Greeting", "Hello", &["work"]);
    let outcome = root.submit().await.unwrap();

    assert_eq!(outcome, SubmitOutcome::SaveFailed);
    assert_eq!(root.backend().calls().last(), Some(&Call::Fetch));
    assert_eq!(root.form().name, "Greeting");
    assert_eq!(root.form().pending_tags.len(), 1);
    assert!(root.create_dialog().is_open());
}

#[tokio::test]
async fn test_validation_blocks_backend_calls() {
    let root = PromptClip::new(FakeBackend::default());
    root.set_content("Hello");

    let errors = root.submit().await.unwrap_err();
    assert_eq!(
        errors.for_field(FormField::Name),
        Some("Please enter a prompt name")
    );
    assert_eq!(errors.for_field(FormField::Content), None);
    assert!(root.backend().calls().is_empty());
    assert_eq!(root.form().content, "Hello");
}

#[tokio::test]
async fn test_delete_then_refetch() {
    let p1 = Prompt {
        id: "p1".into(),
        name: "Greeting".into(),
        content: "Hello".into(),
        tags: vec![],
        created_at: Some(1),
    };
    let collection = PromptCollection {
        prompts: vec![p1],
        tags: vec![],
    };
    let root = PromptClip::new(FakeBackend::with_collection(collection));
    root.load().await;
    assert_eq!(root.prompts().len(), 1);

    root.delete_prompt("p1").await;

    let calls = root.backend().calls();
    assert_eq!(&calls[1..], &[Call::Delete("p1".into()), Call::Fetch]);
    assert!(root.prompts().iter().all(|p| p.id != "p1"));
}

#[tokio::test]
async fn test_confirmed_delete_removes_prompt_and_closes_dialog() {
    let collection = PromptCollection {
        prompts: vec![Prompt {
            id: "p1".into(),
            name: "Greeting".into(),
            content: "Hello".into(),
            tags: vec![],
            created_at: Some(1),
        }],
        tags: vec![],
    };
    let root = PromptClip::new(FakeBackend::with_collection(collection));
    root.load().await;
    let dialog = ConfirmDialog::new("Delete prompt?", "This prompt will be removed permanently.");

    // cancelling has no side effect
    dialog.open();
    dialog.cancel();
    assert!(!dialog.is_open());
    assert_eq!(root.backend().calls(), vec![Call::Fetch]);

    dialog.open();
    let confirmed = dialog.confirm(|| root.delete_prompt("p1")).await;

    assert!(confirmed);
    assert!(!dialog.is_open());
    assert_eq!(
        root.backend().calls(),
        vec![Call::Fetch, Call::Delete("p1".into()), Call::Fetch]
    );
    assert!(root.prompts().is_empty());
}

#[tokio::test]
async fn test_initial_fetch_failure_leaves_no_collection() {
    let backend = FakeBackend::with_collection(known_tags());
    backend.fail_next_fetch();
    let root = PromptClip::new(backend);

    root.load().await;

    assert!(root.collection().is_none());
    assert!(root.prompts().is_empty());
}

#[tokio::test]
async fn test_tags_without_collection_keep_client_ids() {
    let backend = FakeBackend::with_collection(known_tags());
    backend.fail_next_fetch();
    let root = PromptClip::new(backend);
    root.load().await;

    fill_form(&root, "Greeting", "Hello", &["work"]);
    let client_id = root.form().pending_tags[0].id.clone();
    root.submit().await.unwrap();

    let saved = root.backend().saved_prompts();
    assert_eq!(saved[0].tags[0].id, client_id);
}

#[tokio::test]
async fn test_pending_tags_can_be_removed() {
    let root = PromptClip::new(FakeBackend::default());
    fill_form(&root, "Greeting", "Hello", &["work", "work"]);

    let first = root.form().pending_tags[0].id.clone();
    assert!(root.remove_pending_tag(&first).is_some());
    assert!(root.remove_pending_tag(&first).is_none());
    assert_eq!(root.form().pending_tags.len(), 1);

    root.set_tag_input("");
    assert!(root.add_pending_tag().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_stale_fetch_result_is_dropped() {
    let stale = PromptCollection {
        prompts: vec![Prompt::new("old", "old", vec![])],
        tags: vec![],
    };
    let backend = FakeBackend::default();
    // First fetch is slow and answers with outdated data
    backend.fetch_delay.lock().push_back(Duration::from_millis(500));
    backend.fetch_script.lock().push_back(Ok(stale));
    let root = Arc::new(PromptClip::new(backend));

    let slow = tokio::spawn({
        let root = Arc::clone(&root);
        async move { root.load().await }
    });
    tokio::task::yield_now().await;

    root.delete_prompt("missing").await;
    assert!(root.prompts().is_empty());

    tokio::time::advance(Duration::from_millis(600)).await;
    slow.await.unwrap();

    assert!(root.collection().is_some());
    assert!(root.prompts().is_empty());
}
