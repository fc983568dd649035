//! Error type carried across the invoke bridge

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Result alias for operations returning [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let err = AppError::with_message(ErrorCode::UnknownCommand, "Unknown command: nope")
            .with_detail("command", "nope");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["code"], json!(9));
        assert_eq!(value["message"], json!("Unknown command: nope"));
        assert_eq!(value["details"]["command"], json!("nope"));
    }

    #[test]
    fn test_details_omitted_when_empty() {
        let err = AppError::with_message(ErrorCode::NotFound, "gone");
        let value = serde_json::to_value(err).unwrap();
        assert!(value.get("details").is_none());
    }
}
