//! Prompt Clip store
//!
//! The persistence process behind the invoke bridge: a SQLite database
//! holding prompts and tags, and a [`CommandHandler`] answering the three
//! named calls `save_prompt`, `fetch_prompts` and `delete_prompt`.

pub mod command;
pub mod db;
pub mod error;
pub mod service;

pub use command::CommandHandler;
pub use db::DbService;
pub use error::{StoreError, StoreResult};
pub use service::PromptStore;
