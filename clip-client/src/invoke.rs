//! [`PromptBackend`] over an [`InvokeTransport`]

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use shared::models::{Prompt, PromptCollection};
use shared::{Command, DeletePromptRequest, FetchPromptsRequest, SavePromptRequest};

use crate::{ClientError, ClientResult, InvokeTransport, PromptBackend};

/// Speaks the named-call protocol to the store process
#[derive(Debug, Clone)]
pub struct InvokeBackend<T> {
    transport: T,
}

impl<T: InvokeTransport> InvokeBackend<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<A: Serialize + Sync>(&self, command: Command, args: &A) -> ClientResult<Value> {
        let args = serde_json::to_value(args)?;
        let result = self.transport.invoke(command, args).await;
        if let Err(e) = &result {
            tracing::debug!(%command, error = %e, "Invoke failed");
        }
        result
    }
}

#[async_trait]
impl<T: InvokeTransport> PromptBackend for InvokeBackend<T> {
    async fn save_prompt(&self, prompt: &Prompt) -> ClientResult<()> {
        let req = SavePromptRequest {
            prompt: prompt.clone(),
        };
        self.call(Command::SavePrompt, &req).await?;
        Ok(())
    }

    async fn fetch_prompts(&self) -> ClientResult<PromptCollection> {
        let value = self
            .call(Command::FetchPrompts, &FetchPromptsRequest::default())
            .await?;
        if value.is_null() {
            return Err(ClientError::InvalidResponse(
                "fetch_prompts returned nothing".into(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    async fn delete_prompt(&self, prompt_id: &str) -> ClientResult<()> {
        let req = DeletePromptRequest {
            prompt_id: prompt_id.to_string(),
        };
        self.call(Command::DeletePrompt, &req).await?;
        Ok(())
    }
}
