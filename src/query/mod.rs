//! Query subsystem for nestquery
//!
//! Turns a caller-supplied search specification into a validated, flat
//! predicate list the executor and the stores share.
//!
//! # Flow
//!
//! 1. Raw string request parameters parse into a typed [`SearchSpec`]
//!    (`params`), or the caller builds one directly.
//! 2. The spec is validated before any store access (`validate`).
//! 3. The spec lowers into one `Vec<Predicate>` (`SearchSpec::predicates`).
//!
//! The single lowering is deliberate: the page fetch, the match count, the
//! in-memory filter pass, and the SQL composer all consume the same list,
//! so the count and the page can never diverge in predicate logic.

mod errors;
mod params;
mod spec;
mod validate;

pub use errors::{QueryError, QueryErrorCode, QueryResult, Severity};
pub use params::{parse_params, ParamLimits};
pub use spec::{KindScope, Predicate, SearchSpec, SortOrder};
pub use validate::SpecValidator;
