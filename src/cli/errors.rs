//! CLI error types.

use thiserror::Error;

use crate::executor::SearchError;
use crate::query::QueryError;
use crate::store::StoreError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, malformed, or inconsistent
    #[error("configuration error: {0}")]
    Config(String),

    /// The async runtime could not be built
    #[error("runtime error: {0}")]
    Runtime(String),

    /// A filter flag was rejected
    #[error("{0}")]
    Query(#[from] QueryError),

    /// The search itself failed
    #[error("{0}")]
    Search(#[from] SearchError),

    /// A store operation outside a search failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl CliError {
    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        CliError::Config(reason.into())
    }

    /// Create a runtime error
    pub fn runtime(reason: impl Into<String>) -> Self {
        CliError::Runtime(reason.into())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
