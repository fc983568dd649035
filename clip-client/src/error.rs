//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The store rejected the call
    #[error("Backend error {code}: {message}")]
    Backend { code: ErrorCode, message: String },

    /// The call never reached the store, or its answer never came back
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Error code as reported by the store, if any
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Backend { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<AppError> for ClientError {
    fn from(err: AppError) -> Self {
        ClientError::Backend {
            code: err.code,
            message: err.message,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
