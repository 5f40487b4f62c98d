//! Search error types.
//!
//! A search fails in exactly two ways: the spec is rejected before the
//! store is touched, or the backing store fetch fails. Both are explicit
//! errors; an invalid request is never flattened into an empty page.

use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Errors surfaced by search execution
#[derive(Debug, Error)]
pub enum SearchError {
    /// The specification was rejected before any store access
    #[error("{0}")]
    Spec(#[from] QueryError),

    /// The candidate fetch failed; not retried here
    #[error("backing store failure: {0}")]
    Store(#[from] StoreError),
}

impl SearchError {
    /// Returns true when the caller's request was at fault
    pub fn is_rejection(&self) -> bool {
        matches!(self, SearchError::Spec(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_errors_are_rejections() {
        let err = SearchError::from(QueryError::limit_invalid());
        assert!(err.is_rejection());
        let display = format!("{}", err);
        assert!(display.contains("NEST_SPEC_LIMIT_INVALID"));
    }

    #[test]
    fn test_store_errors_are_not_rejections() {
        let err = SearchError::from(StoreError::dataset_decode(
            "listings.json",
            "unexpected end of file",
        ));
        assert!(!err.is_rejection());
        assert!(format!("{}", err).contains("backing store failure"));
    }
}
