//! Shared types for Prompt Clip
//!
//! Data model, bridge request payloads, command names and the unified
//! error type used by both the store process and the application.

pub mod command;
pub mod error;
pub mod models;
pub mod request;

// Re-exports
pub use command::{Command, UnknownCommand};
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Prompt, PromptCollection, Tag};
pub use request::{DeletePromptRequest, FetchPromptsRequest, SavePromptRequest};
pub use serde::{Deserialize, Serialize};
