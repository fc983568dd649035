//! Unified error system for Prompt Clip
//!
//! - [`ErrorCode`]: numeric codes carried across the invoke bridge
//! - [`AppError`]: error with code, message and optional details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 9xxx: System errors

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
