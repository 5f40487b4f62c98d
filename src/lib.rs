//! nestquery - a strict, deterministic search core for real-estate listings
//!
//! Given a filter/sort/paginate specification and a backing store of
//! listing records, produce a deterministic page of results plus the total
//! match count. The same pipeline runs in two equivalent ways: pushed down
//! to the store as parameterized SQL, or composed in memory over a fetched
//! candidate set.

pub mod cli;
pub mod executor;
pub mod listing;
pub mod observability;
pub mod query;
pub mod store;
