//! Centralized error types for vigil.

use thiserror::Error;

/// Main error type for vigil operations.
#[derive(Error, Debug)]
pub enum VigilError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Report not found: {0}")]
    ReportNotFound(i64),

    #[error("Invalid status: '{0}' (expected one of: pending, in_progress, resolved)")]
    InvalidStatus(String),

    #[error("Database error: {0}")]
    Database(#[from] vigil_db::DbError),
}

/// Result type for vigil operations.
pub type VigilResult<T> = Result<T, VigilError>;

impl VigilError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
