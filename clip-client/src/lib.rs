//! Clip Client - client side of the invoke bridge
//!
//! [`PromptBackend`] is what the application talks to. [`InvokeBackend`]
//! implements it on top of any [`InvokeTransport`] that can carry a named
//! call to the store process.

pub mod backend;
pub mod error;
pub mod invoke;
pub mod transport;

pub use backend::PromptBackend;
pub use error::{ClientError, ClientResult};
pub use invoke::InvokeBackend;
pub use transport::InvokeTransport;
#[cfg(feature = "in-process")]
pub use transport::InProcessTransport;

// Re-export shared types for convenience
pub use shared::models::{Prompt, PromptCollection, Tag};
