//! Store error types

use shared::UnknownCommand;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Store error type
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error()
            && db_err.is_unique_violation()
        {
            return StoreError::Duplicate(db_err.message().to_string());
        }
        StoreError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migration(err.to_string())
    }
}

impl From<UnknownCommand> for StoreError {
    fn from(err: UnknownCommand) -> Self {
        StoreError::UnknownCommand(err.0)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::InvalidArgs(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::NotFound(_) => ErrorCode::NotFound,
            StoreError::Duplicate(_) => ErrorCode::AlreadyExists,
            StoreError::Validation(_) => ErrorCode::ValidationFailed,
            StoreError::Database(_) | StoreError::Migration(_) => ErrorCode::DatabaseError,
            StoreError::UnknownCommand(_) => ErrorCode::UnknownCommand,
            StoreError::InvalidArgs(_) => ErrorCode::InvalidRequest,
        };
        let app_err = AppError::with_message(code, err.to_string());
        match err {
            StoreError::UnknownCommand(name) => app_err.with_detail("command", name),
            _ => app_err,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
