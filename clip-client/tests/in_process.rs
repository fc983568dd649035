//! InvokeBackend over the in-process transport against a real store

#![cfg(feature = "in-process")]

use clip_client::{InProcessTransport, InvokeBackend, PromptBackend};
use clip_store::{CommandHandler, PromptStore};
use shared::ErrorCode;
use shared::models::{Prompt, Tag};

async fn backend() -> InvokeBackend<InProcessTransport> {
    let store = PromptStore::in_memory().await.unwrap();
    InvokeBackend::new(InProcessTransport::new(CommandHandler::new(store)))
}

#[tokio::test]
async fn test_round_trip_through_store() {
    let backend = backend().await;

    let prompt = Prompt::new("Greeting", "Hello {name}", vec![Tag::new("work")]);
    backend.save_prompt(&prompt).await.unwrap();

    let collection = backend.fetch_prompts().await.unwrap();
    assert_eq!(collection.prompts.len(), 1);
    assert_eq!(collection.prompts[0].id, prompt.id);

    backend.delete_prompt(&prompt.id).await.unwrap();
    assert!(backend.fetch_prompts().await.unwrap().prompts.is_empty());
}

#[tokio::test]
async fn test_store_errors_keep_their_code() {
    let backend = backend().await;
    let err = backend.delete_prompt("missing").await.unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::NotFound));
}
