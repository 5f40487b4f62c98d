//! Search executor for nestquery.
//!
//! Two composition variants produce the same result for the same spec and
//! the same underlying data:
//!
//! - [`SearchExecutor::search`] pushes the predicate list, sort, and slice
//!   down to a [`QueryStore`]; the total comes from a separate count call
//!   fed the same predicate list.
//! - [`SearchExecutor::search_in_memory`] fetches the full candidate set
//!   from a [`CandidateSource`] once and filters, sorts, and slices it
//!   here. Only appropriate for bounded candidate sets such as a dataset
//!   file or rows already scoped by a store-side procedure.
//!
//! The executor itself is a pure transformation: the store fetch is the
//! only await, and no state is shared across invocations.

use crate::query::{SearchSpec, SpecValidator};
use crate::store::{CandidateScope, CandidateSource, QueryStore, StoreQuery};

use super::errors::SearchError;
use super::filters::ListingFilter;
use super::paginator::Paginator;
use super::result::{PageInfo, SearchResult};
use super::sorter::ListingSorter;

/// Runs searches against a backing store
pub struct SearchExecutor;

impl SearchExecutor {
    /// Executes a search with store-side composition.
    ///
    /// The count query and the page query are built from the same lowered
    /// predicate list, so the totals and the page contents can never
    /// disagree about what matches.
    pub async fn search<S>(store: &S, spec: &SearchSpec) -> Result<SearchResult, SearchError>
    where
        S: QueryStore + ?Sized,
    {
        SpecValidator::validate(spec)?;

        let query = StoreQuery::new(
            spec.predicates(),
            spec.sort,
            Paginator::offset(spec.page, spec.limit),
            spec.limit,
        );

        let total = store.count(query.predicates()).await?;
        let listings = store.fetch_page(&query).await?;

        Ok(SearchResult::new(
            listings,
            PageInfo::new(total, spec.page, spec.limit),
        ))
    }

    /// Executes a search with in-memory composition.
    ///
    /// The candidate set is fetched once (optionally pre-scoped to exclude
    /// one owner) and the whole pipeline runs here. `retain` preserves
    /// candidate order, and the sort is stable, so pagination is
    /// deterministic across identical requests.
    pub async fn search_in_memory<S>(
        source: &S,
        spec: &SearchSpec,
    ) -> Result<SearchResult, SearchError>
    where
        S: CandidateSource + ?Sized,
    {
        SpecValidator::validate(spec)?;

        let predicates = spec.predicates();
        let scope = CandidateScope {
            exclude_owner: spec.exclude_owner,
        };

        let mut candidates = source.fetch_candidates(&scope).await?;
        candidates.retain(|listing| ListingFilter::matches(listing, &predicates));
        ListingSorter::sort(&mut candidates, spec.sort);

        let (listings, page) = Paginator::slice(candidates, spec.page, spec.limit);
        Ok(SearchResult::new(listings, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Listing;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn listing(value: serde_json::Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            listing(json!({ "id": 1, "listing_type": "rent", "price": 80000 })),
            listing(json!({ "id": 2, "listing_type": "sale", "price": 5000000 })),
            listing(json!({ "id": 3, "listing_type": "rent", "price": 50000 })),
        ])
    }

    #[tokio::test]
    async fn test_invalid_spec_rejected_without_store_access() {
        let spec = SearchSpec::new().with_limit(0);
        let err = SearchExecutor::search(&store(), &spec).await.unwrap_err();
        assert!(err.is_rejection());

        let err = SearchExecutor::search_in_memory(&store(), &spec)
            .await
            .unwrap_err();
        assert!(err.is_rejection());
    }

    #[tokio::test]
    async fn test_invalid_spec_distinct_from_empty_result() {
        // A spec that matches nothing still succeeds.
        let spec = SearchSpec::new().with_search_term("nowhere");
        let result = SearchExecutor::search(&store(), &spec).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.page.total, 0);

        // A rejected spec is an error, not an empty page.
        let spec = SearchSpec::new().with_page(0);
        assert!(SearchExecutor::search(&store(), &spec).await.is_err());
    }

    #[tokio::test]
    async fn test_both_variants_agree_on_simple_search() {
        let spec = SearchSpec::new().with_kind(crate::listing::ListingKind::Rent);
        let store = store();

        let pushed = SearchExecutor::search(&store, &spec).await.unwrap();
        let in_memory = SearchExecutor::search_in_memory(&store, &spec).await.unwrap();

        let pushed_ids: Vec<i64> = pushed.iter().map(|l| l.id).collect();
        let memory_ids: Vec<i64> = in_memory.iter().map(|l| l.id).collect();
        assert_eq!(pushed_ids, memory_ids);
        assert_eq!(pushed.page, in_memory.page);
        assert_eq!(pushed.page.total, 2);
    }
}
