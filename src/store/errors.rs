//! Store error types.
//!
//! Store failures are collaborator failures: they propagate to the caller
//! unretried, and the caller decides how to surface them. They are never
//! folded into an empty result.

use thiserror::Error;

/// Errors surfaced by backing stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// A table name failed the identifier check
    #[error("invalid table name '{0}'")]
    InvalidTable(String),

    /// A dataset file could not be read
    #[error("failed to read dataset {path}: {reason}")]
    DatasetIo { path: String, reason: String },

    /// A dataset file could not be decoded
    #[error("failed to decode dataset {path}: {reason}")]
    DatasetDecode { path: String, reason: String },

    /// The database rejected or failed a query
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Create a dataset read error
    pub fn dataset_io(path: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::DatasetIo {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a dataset decode error
    pub fn dataset_decode(path: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::DatasetDecode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
