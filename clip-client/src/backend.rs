//! Backend trait

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{Prompt, PromptCollection};

use crate::ClientResult;

/// The three calls the application makes to the store
#[async_trait]
pub trait PromptBackend: Send + Sync {
    async fn save_prompt(&self, prompt: &Prompt) -> ClientResult<()>;
    async fn fetch_prompts(&self) -> ClientResult<PromptCollection>;
    async fn delete_prompt(&self, prompt_id: &str) -> ClientResult<()>;
}

#[async_trait]
impl<B: PromptBackend + ?Sized> PromptBackend for Arc<B> {
    async fn save_prompt(&self, prompt: &Prompt) -> ClientResult<()> {
        (**self).save_prompt(prompt).await
    }

    async fn fetch_prompts(&self) -> ClientResult<PromptCollection> {
        (**self).fetch_prompts().await
    }

    async fn delete_prompt(&self, prompt_id: &str) -> ClientResult<()> {
        (**self).delete_prompt(prompt_id).await
    }
}
