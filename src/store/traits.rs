//! Store traits and the store-side query shape.

use async_trait::async_trait;

use crate::listing::Listing;
use crate::query::{Predicate, SortOrder};

use super::errors::StoreResult;

/// Pre-scoping applied when fetching a full candidate set.
///
/// Mirrors what the production stored procedures offer: all rows, or all
/// rows excluding one owner. Any further filtering happens in the executor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateScope {
    /// Exclude listings owned by this user
    pub exclude_owner: Option<i64>,
}

impl CandidateScope {
    /// Scope that excludes one owner's listings
    pub fn excluding_owner(owner_id: i64) -> Self {
        Self {
            exclude_owner: Some(owner_id),
        }
    }
}

/// One store-side page request: predicates, order, and slice.
///
/// Constructed once per search; [`StoreQuery::predicates`] is the same list
/// the count call receives, which is what keeps the total and the page
/// consistent with each other.
#[derive(Debug, Clone)]
pub struct StoreQuery {
    predicates: Vec<Predicate>,
    sort: SortOrder,
    offset: u64,
    limit: u32,
}

impl StoreQuery {
    /// Creates a page request
    pub fn new(predicates: Vec<Predicate>, sort: SortOrder, offset: u64, limit: u32) -> Self {
        Self {
            predicates,
            sort,
            offset,
            limit,
        }
    }

    /// The filter predicates, shared by the page fetch and the count
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// The requested ordering
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Zero-based offset of the requested slice
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum rows in the requested slice
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// A store that can hand back the full candidate set.
///
/// The fetch is the single await of a search; a failure propagates
/// unretried.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fetches the candidate set in the store's canonical order.
    async fn fetch_candidates(&self, scope: &CandidateScope) -> StoreResult<Vec<Listing>>;
}

/// A store that executes predicates on its own side.
#[async_trait]
pub trait QueryStore: Send + Sync {
    /// Fetches one ordered page of matches.
    async fn fetch_page(&self, query: &StoreQuery) -> StoreResult<Vec<Listing>>;

    /// Counts all matches for the same predicates, ignoring sort and slice.
    async fn count(&self, predicates: &[Predicate]) -> StoreResult<u64>;
}
