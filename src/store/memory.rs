//! In-memory listing store.
//!
//! Backs dataset files and every test suite. Candidate order is insertion
//! order (the in-memory analogue of the MySQL store's ascending-id order),
//! and both trait implementations preserve it, so either composition
//! variant paginates identically over the same data.

use std::fs;
use std::path::Path;

use async_trait::async_trait;

use crate::executor::{ListingFilter, ListingSorter};
use crate::listing::Listing;
use crate::query::Predicate;

use super::errors::{StoreError, StoreResult};
use super::traits::{CandidateScope, CandidateSource, QueryStore, StoreQuery};

/// A listing store over a plain vector
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    listings: Vec<Listing>,
}

impl MemoryStore {
    /// Creates a store over the given listings, kept in insertion order
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Loads a store from a JSON dataset file (an array of listing records).
    ///
    /// Record decoding is tolerant: dirty fields degrade, they don't fail
    /// the file. Only unreadable files and non-array JSON are errors.
    pub fn from_json_file(path: &Path) -> StoreResult<Self> {
        let shown = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| StoreError::dataset_io(&shown, e))?;
        let listings: Vec<Listing> = serde_json::from_str(&content)
            .map_err(|e| StoreError::dataset_decode(&shown, e))?;
        Ok(Self::new(listings))
    }

    /// Returns the number of listings held
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Returns true if the store holds no listings
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Returns the held listings in candidate order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    fn matches(&self, predicates: &[Predicate]) -> Vec<Listing> {
        self.listings
            .iter()
            .filter(|listing| ListingFilter::matches(listing, predicates))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CandidateSource for MemoryStore {
    async fn fetch_candidates(&self, scope: &CandidateScope) -> StoreResult<Vec<Listing>> {
        let candidates = match scope.exclude_owner {
            Some(owner_id) => self
                .listings
                .iter()
                .filter(|listing| listing.owner_id != owner_id)
                .cloned()
                .collect(),
            None => self.listings.clone(),
        };
        Ok(candidates)
    }
}

#[async_trait]
impl QueryStore for MemoryStore {
    async fn fetch_page(&self, query: &StoreQuery) -> StoreResult<Vec<Listing>> {
        let mut matches = self.matches(query.predicates());
        ListingSorter::sort(&mut matches, query.sort());
        Ok(matches
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect())
    }

    async fn count(&self, predicates: &[Predicate]) -> StoreResult<u64> {
        Ok(self
            .listings
            .iter()
            .filter(|listing| ListingFilter::matches(listing, predicates))
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingKind;
    use crate::query::SortOrder;
    use serde_json::json;
    use std::io::Write;

    fn listing(value: serde_json::Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            listing(json!({ "id": 1, "listing_type": "rent", "price": 80000, "owner_id": 5 })),
            listing(json!({ "id": 2, "listing_type": "sale", "price": 9000000, "owner_id": 5 })),
            listing(json!({ "id": 3, "listing_type": "rent", "price": 50000, "owner_id": 8 })),
            listing(json!({ "id": 4, "listing_type": "rent", "price": 120000, "owner_id": 9 })),
        ])
    }

    #[tokio::test]
    async fn test_candidates_keep_insertion_order() {
        let all = store()
            .fetch_candidates(&CandidateScope::default())
            .await
            .unwrap();
        let ids: Vec<i64> = all.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_owner_scope_excludes() {
        let scoped = store()
            .fetch_candidates(&CandidateScope::excluding_owner(5))
            .await
            .unwrap();
        let ids: Vec<i64> = scoped.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_page_and_count_share_predicates() {
        let store = store();
        let predicates = vec![Predicate::Kind(ListingKind::Rent)];

        let query = StoreQuery::new(predicates.clone(), SortOrder::PriceLow, 0, 2);
        let page = store.fetch_page(&query).await.unwrap();
        let total = store.count(&predicates).await.unwrap();

        let ids: Vec<i64> = page.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty() {
        let store = store();
        let query = StoreQuery::new(Vec::new(), SortOrder::Featured, 100, 10);
        assert!(store.fetch_page(&query).await.unwrap().is_empty());
    }

    #[test]
    fn test_dataset_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "price": "45000"}}, {{"id": 2, "listing_type": "timeshare"}}]"#
        )
        .unwrap();

        let store = MemoryStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.listings()[0].price, Some(45000.0));
        assert!(store.listings()[1].kind.is_other());
    }

    #[test]
    fn test_dataset_decode_failure_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();

        let err = MemoryStore::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::DatasetDecode { .. }));
    }
}
