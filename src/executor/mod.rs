//! Search executor subsystem for nestquery
//!
//! Consumes a validated specification and produces a deterministic page of
//! listings plus the total match count.
//!
//! # Execution flow (strict order)
//!
//! 1. Validate the spec (reject before any store access)
//! 2. Lower the spec into one flat predicate list
//! 3. Obtain candidates (pushed down to the store, or fetched in full)
//! 4. Filter strictly according to the predicates (AND semantics)
//! 5. Apply the stable sort for the requested order
//! 6. Slice the requested page and compute page info
//!
//! # Invariants
//!
//! - Same spec + same data = same page, in both composition variants
//! - The count and the page fetch always share one predicate list
//! - A page past the end is an empty page, never an error
//! - Malformed records never abort the pass

mod errors;
mod executor;
mod filters;
mod paginator;
mod result;
mod sorter;

pub use errors::SearchError;
pub use executor::SearchExecutor;
pub use filters::ListingFilter;
pub use paginator::Paginator;
pub use result::{PageInfo, SearchResult};
pub use sorter::ListingSorter;
