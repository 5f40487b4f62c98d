//! Query error types.
//!
//! Error codes:
//! - NEST_SPEC_PAGE_INVALID (REJECT)
//! - NEST_SPEC_LIMIT_INVALID (REJECT)
//! - NEST_SPEC_BOUND_INVALID (REJECT)
//! - NEST_PARAM_INVALID (REJECT)
//! - NEST_PARAM_UNKNOWN (REJECT)
//!
//! All query errors reject the request before the backing store is touched;
//! a rejected spec is structurally distinct from a search that legitimately
//! matches zero rows.

use std::fmt;

/// Severity levels for query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Query-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Page number is zero
    NestSpecPageInvalid,
    /// Limit is zero
    NestSpecLimitInvalid,
    /// Price bound is not a finite number
    NestSpecBoundInvalid,
    /// A request parameter failed to parse
    NestParamInvalid,
    /// A request parameter name is not recognized
    NestParamUnknown,
}

impl QueryErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::NestSpecPageInvalid => "NEST_SPEC_PAGE_INVALID",
            QueryErrorCode::NestSpecLimitInvalid => "NEST_SPEC_LIMIT_INVALID",
            QueryErrorCode::NestSpecBoundInvalid => "NEST_SPEC_BOUND_INVALID",
            QueryErrorCode::NestParamInvalid => "NEST_PARAM_INVALID",
            QueryErrorCode::NestParamUnknown => "NEST_PARAM_UNKNOWN",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error type with full context
#[derive(Debug, Clone)]
pub struct QueryError {
    /// Error code
    code: QueryErrorCode,
    /// Human-readable message
    message: String,
    /// Parameter name if applicable
    param: Option<String>,
}

impl QueryError {
    /// Create a page invalid error
    pub fn page_invalid() -> Self {
        Self {
            code: QueryErrorCode::NestSpecPageInvalid,
            message: "page must be a positive integer".into(),
            param: Some("page".into()),
        }
    }

    /// Create a limit invalid error
    pub fn limit_invalid() -> Self {
        Self {
            code: QueryErrorCode::NestSpecLimitInvalid,
            message: "limit must be a positive integer".into(),
            param: Some("limit".into()),
        }
    }

    /// Create a bound invalid error
    pub fn bound_invalid(param: impl Into<String>, value: f64) -> Self {
        let p = param.into();
        Self {
            code: QueryErrorCode::NestSpecBoundInvalid,
            message: format!("'{}' is not a finite number: {}", p, value),
            param: Some(p),
        }
    }

    /// Create a parameter invalid error
    pub fn param_invalid(param: impl Into<String>, reason: impl Into<String>) -> Self {
        let p = param.into();
        Self {
            code: QueryErrorCode::NestParamInvalid,
            message: format!("invalid value for '{}': {}", p, reason.into()),
            param: Some(p),
        }
    }

    /// Create an unknown parameter error
    pub fn param_unknown(param: impl Into<String>) -> Self {
        let p = param.into();
        Self {
            code: QueryErrorCode::NestParamUnknown,
            message: format!("unknown parameter '{}'", p),
            param: Some(p),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending parameter name if applicable
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for QueryError {}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
