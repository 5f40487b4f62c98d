//! Variant Equivalence Tests
//!
//! The store-side pushdown and the in-memory composition are two renderings
//! of one pipeline: for the same spec over the same data they must return
//! the same listings, in the same order, with the same totals.

use chrono::NaiveDate;
use nestquery::executor::SearchExecutor;
use nestquery::listing::{Listing, ListingKind, PropertyKind};
use nestquery::query::{SearchSpec, SortOrder};
use nestquery::store::MemoryStore;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn listing(value: serde_json::Value) -> Listing {
    serde_json::from_value(value).unwrap()
}

fn fixture_store() -> MemoryStore {
    MemoryStore::new(
        (1..=48)
            .map(|id| {
                let kind = match id % 3 {
                    0 => "sale",
                    1 => "rent",
                    _ => "holiday-let", // outside the vocabulary on purpose
                };
                let property = match id % 4 {
                    0 => "apartment",
                    1 => "house",
                    2 => "shop",
                    _ => "warehouse",
                };
                let area = ["Clifton", "Gulshan", "DHA Phase 5"][(id % 3) as usize];
                listing(json!({
                    "id": id,
                    "title": format!("Listing number {}", id),
                    "city": if id % 2 == 0 { "Karachi" } else { "Lahore" },
                    "area": area,
                    "listing_type": kind,
                    "property_type": property,
                    "price": if id % 11 == 0 {
                        json!("not yet priced")
                    } else {
                        json!(20_000 + (id % 9) * 7_500)
                    },
                    "bedrooms": id % 5,
                    "bathrooms": id % 4,
                    "is_featured": id % 6 == 0,
                    "posted_at": format!("2024-{:02}-{:02}T09:00:00Z", 1 + id % 12, 1 + id % 27),
                    "available_from": if id % 7 == 0 {
                        json!(null)
                    } else {
                        json!(format!("2026-{:02}-01", 1 + id % 12))
                    },
                    "owner_id": id % 8
                }))
            })
            .collect(),
    )
}

async fn assert_variants_agree(store: &MemoryStore, spec: &SearchSpec) {
    let pushed = SearchExecutor::search(store, spec).await.unwrap();
    let in_memory = SearchExecutor::search_in_memory(store, spec).await.unwrap();

    let pushed_ids: Vec<i64> = pushed.iter().map(|l| l.id).collect();
    let memory_ids: Vec<i64> = in_memory.iter().map(|l| l.id).collect();

    assert_eq!(pushed_ids, memory_ids, "page contents diverged: {:?}", spec);
    assert_eq!(pushed.page, in_memory.page, "page info diverged: {:?}", spec);
}

// =============================================================================
// Equivalence Tests
// =============================================================================

/// The unfiltered default search agrees across variants.
#[tokio::test]
async fn test_default_spec_agrees() {
    assert_variants_agree(&fixture_store(), &SearchSpec::new()).await;
}

/// Every sort order agrees, on every page.
#[tokio::test]
async fn test_all_sorts_all_pages_agree() {
    let store = fixture_store();
    for sort in [
        SortOrder::Featured,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::Newest,
    ] {
        for page in 1..=7 {
            let spec = SearchSpec::new().with_sort(sort).with_page(page).with_limit(7);
            assert_variants_agree(&store, &spec).await;
        }
    }
}

/// A heavily filtered spec agrees.
#[tokio::test]
async fn test_combined_filters_agree() {
    let spec = SearchSpec::new()
        .with_kind(ListingKind::Rent)
        .with_property_kind(PropertyKind::House)
        .with_search_term("karachi")
        .with_price_range(Some(20_000.0), Some(80_000.0))
        .with_sort(SortOrder::PriceLow);
    assert_variants_agree(&fixture_store(), &spec).await;
}

/// Area OR filters agree.
#[tokio::test]
async fn test_area_filters_agree() {
    let spec = SearchSpec::new()
        .with_area("clifton")
        .with_area("dha")
        .with_limit(9);
    assert_variants_agree(&fixture_store(), &spec).await;
}

/// Owner exclusion agrees: the pushdown filters it while the in-memory
/// variant pre-scopes the candidate fetch.
#[tokio::test]
async fn test_owner_exclusion_agrees() {
    let spec = SearchSpec::new().without_owner(3).with_limit(12);
    assert_variants_agree(&fixture_store(), &spec).await;
}

/// Availability cutoffs agree, including over null availability.
#[tokio::test]
async fn test_availability_cutoff_agrees() {
    let spec = SearchSpec::new()
        .available_by(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
        .with_limit(20);
    assert_variants_agree(&fixture_store(), &spec).await;
}

/// Specs with zero matches agree on emptiness and totals.
#[tokio::test]
async fn test_empty_results_agree() {
    let spec = SearchSpec::new().with_search_term("zzz-no-match-zzz");
    assert_variants_agree(&fixture_store(), &spec).await;
}

/// Pages past the end agree.
#[tokio::test]
async fn test_past_end_pages_agree() {
    let spec = SearchSpec::new().with_page(40).with_limit(6);
    assert_variants_agree(&fixture_store(), &spec).await;
}

/// Unparseable prices and unknown enum values degrade identically.
#[tokio::test]
async fn test_dirty_records_degrade_identically() {
    let spec = SearchSpec::new()
        .with_price_range(Some(0.0), None)
        .with_sort(SortOrder::PriceHigh)
        .with_limit(15);
    assert_variants_agree(&fixture_store(), &spec).await;
}

/// Both variants reject the same invalid specs.
#[tokio::test]
async fn test_invalid_specs_rejected_by_both() {
    let store = fixture_store();
    for spec in [
        SearchSpec::new().with_limit(0),
        SearchSpec::new().with_page(0),
        SearchSpec::new().with_price_range(Some(f64::NAN), None),
    ] {
        let pushed = SearchExecutor::search(&store, &spec).await;
        let in_memory = SearchExecutor::search_in_memory(&store, &spec).await;
        assert!(pushed.is_err());
        assert!(in_memory.is_err());
    }
}
