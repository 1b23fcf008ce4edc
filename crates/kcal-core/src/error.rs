//! Error types for kcal core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages. Rejected mutations guarantee the ledger was left
//! untouched.

use thiserror::Error;

/// Result type alias for kcal operations.
pub type Result<T> = std::result::Result<T, KcalError>;

/// Core error type for kcal operations.
#[derive(Debug, Error)]
pub enum KcalError {
    /// Data validation error (invalid meal input, implausible profile)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data exists but cannot be parsed
    #[error("Corrupt data: {0}")]
    Corrupt(String),

    /// Resource not found (missing day, meal index out of range)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for KcalError {
    fn from(err: std::io::Error) -> Self {
        KcalError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for KcalError {
    fn from(err: serde_json::Error) -> Self {
        KcalError::Corrupt(err.to_string())
    }
}
