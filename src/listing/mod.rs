//! Listing domain model for nestquery
//!
//! The `Listing` record is the sole entity this crate reads. Records arrive
//! from upstream sources that are not always well-typed (decimal prices
//! serialized as strings, malformed timestamps, enum values outside the
//! published vocabulary), so decoding is tolerant by design:
//!
//! - a price that cannot be coerced to a finite number decodes to `None`
//! - a timestamp that cannot be parsed decodes to `None`
//! - an unrecognized `listing_type`/`property_type` decodes to `Other`
//!
//! Tolerated values are exclusion-safe downstream: they fail the filters
//! that reference them instead of raising errors, and they sort with a
//! documented fallback key. Listings are read-only to this crate.

mod decode;
mod types;

pub use types::{Listing, ListingKind, PropertyKind};
