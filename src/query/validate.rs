//! Specification validation.
//!
//! A spec is checked before any store access: pagination must be positive
//! and price bounds must be finite. An inverted price range is NOT
//! rejected, since it legitimately matches zero rows.

use super::errors::{QueryError, QueryResult};
use super::spec::SearchSpec;

/// Validates a search specification before execution.
pub struct SpecValidator;

impl SpecValidator {
    /// Checks a spec, returning the first violation found.
    pub fn validate(spec: &SearchSpec) -> QueryResult<()> {
        if spec.page == 0 {
            return Err(QueryError::page_invalid());
        }
        if spec.limit == 0 {
            return Err(QueryError::limit_invalid());
        }
        if let Some(min) = spec.price_min {
            if !min.is_finite() {
                return Err(QueryError::bound_invalid("price_min", min));
            }
        }
        if let Some(max) = spec.price_max {
            if !max.is_finite() {
                return Err(QueryError::bound_invalid("price_max", max));
            }
        }
        Ok(())
    }
}
