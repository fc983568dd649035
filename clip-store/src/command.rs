//! Named command dispatch
//!
//! Entry point of the store process: a command name plus a JSON argument
//! object in, a JSON value (or an [`AppError`]) out.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::AppError;
use shared::{Command, DeletePromptRequest, FetchPromptsRequest, SavePromptRequest};

use crate::error::StoreError;
use crate::service::PromptStore;

#[derive(Clone)]
pub struct CommandHandler {
    store: PromptStore,
}

impl CommandHandler {
    pub fn new(store: PromptStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PromptStore {
        &self.store
    }

    /// Dispatch one named call
    pub async fn invoke(&self, command: &str, args: Value) -> Result<Value, AppError> {
        let command: Command = command.parse().map_err(|e| {
            tracing::warn!(error = %e, "Rejected command");
            AppError::from(StoreError::from(e))
        })?;
        tracing::debug!(%command, "Invoke");

        let result = match command {
            Command::SavePrompt => {
                let req: SavePromptRequest = parse_args(args)?;
                self.store.save_prompt(req.prompt).await.map(|_| Value::Null)
            }
            Command::FetchPrompts => {
                let _: FetchPromptsRequest = parse_args(args)?;
                match self.store.fetch_prompts().await {
                    Ok(collection) => serde_json::to_value(collection).map_err(StoreError::from),
                    Err(e) => Err(e),
                }
            }
            Command::DeletePrompt => {
                let req: DeletePromptRequest = parse_args(args)?;
                self.store.delete_prompt(&req.prompt_id).await.map(|_| Value::Null)
            }
        };

        result.map_err(|e| {
            tracing::warn!(%command, error = %e, "Command failed");
            AppError::from(e)
        })
    }
}

/// `null` is accepted as "no arguments"
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, AppError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| AppError::from(StoreError::from(e)))
}
