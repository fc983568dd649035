//! Data models
//!
//! Shared between the store process and the application (via the invoke bridge).
//! IDs are UUID v4 strings generated on the client side.

pub mod prompt;
pub mod tag;

// Re-exports
pub use prompt::*;
pub use tag::*;
