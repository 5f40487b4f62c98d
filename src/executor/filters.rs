//! Predicate filtering for search execution.
//!
//! Evaluation is a pure function of (record, predicate list): no side
//! effects, no dependency on iteration order. Predicates combine with AND;
//! the substrings of an area predicate combine with OR. A predicate that
//! references a field the record lacks fails to match instead of erroring.

use crate::listing::Listing;
use crate::query::Predicate;

/// Evaluates predicates against listings
pub struct ListingFilter;

impl ListingFilter {
    /// Checks if a listing matches all predicates
    pub fn matches(listing: &Listing, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(listing, pred))
    }

    /// Checks if a listing matches a single predicate
    fn matches_predicate(listing: &Listing, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::NotOwner(owner_id) => listing.owner_id != *owner_id,

            // A kind that decoded to the catch-all never matches, even
            // against a catch-all filter value.
            Predicate::Kind(kind) => !kind.is_other() && listing.kind == *kind,
            Predicate::Property(kind) => {
                !kind.is_other() && listing.property_kind == *kind
            }

            Predicate::Bedrooms(count) => listing.bedrooms == Some(*count),
            Predicate::Bathrooms(count) => listing.bathrooms == Some(*count),

            Predicate::AreaAny(needles) => match &listing.area {
                Some(area) => {
                    let area = area.to_lowercase();
                    needles.iter().any(|needle| area.contains(needle))
                }
                None => false,
            },

            Predicate::Text(needle) => {
                if listing.title.to_lowercase().contains(needle) {
                    return true;
                }
                listing
                    .city
                    .as_ref()
                    .is_some_and(|city| city.to_lowercase().contains(needle))
            }

            // A missing or unparseable price fails numeric bounds rather
            // than erroring.
            Predicate::PriceMin(min) => listing.price.is_some_and(|p| p >= *min),
            Predicate::PriceMax(max) => listing.price.is_some_and(|p| p <= *max),

            Predicate::AvailableBy(date) => {
                listing.available_from.is_some_and(|from| from <= *date)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListingKind, PropertyKind};
    use chrono::NaiveDate;
    use serde_json::json;

    fn listing(value: serde_json::Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_predicates_match_everything() {
        let l = listing(json!({ "id": 1 }));
        assert!(ListingFilter::matches(&l, &[]));
    }

    #[test]
    fn test_kind_match() {
        let l = listing(json!({ "id": 1, "listing_type": "rent" }));
        assert!(ListingFilter::matches(&l, &[Predicate::Kind(ListingKind::Rent)]));
        assert!(!ListingFilter::matches(&l, &[Predicate::Kind(ListingKind::Sale)]));
    }

    #[test]
    fn test_unrecognized_kind_never_matches() {
        let l = listing(json!({ "id": 1, "listing_type": "auction" }));
        assert!(!ListingFilter::matches(&l, &[Predicate::Kind(ListingKind::Rent)]));
        // Not even a catch-all filter value matches a catch-all record.
        assert!(!ListingFilter::matches(&l, &[Predicate::Kind(ListingKind::Other)]));
    }

    #[test]
    fn test_owner_exclusion() {
        let l = listing(json!({ "id": 1, "owner_id": 42 }));
        assert!(!ListingFilter::matches(&l, &[Predicate::NotOwner(42)]));
        assert!(ListingFilter::matches(&l, &[Predicate::NotOwner(7)]));
    }

    #[test]
    fn test_exact_room_counts() {
        let l = listing(json!({ "id": 1, "bedrooms": 3 }));
        assert!(ListingFilter::matches(&l, &[Predicate::Bedrooms(3)]));
        // Exact match, not "at least".
        assert!(!ListingFilter::matches(&l, &[Predicate::Bedrooms(2)]));

        // A record without the field fails the predicate.
        let bare = listing(json!({ "id": 2 }));
        assert!(!ListingFilter::matches(&bare, &[Predicate::Bedrooms(3)]));
    }

    #[test]
    fn test_area_or_semantics() {
        let pred = Predicate::AreaAny(vec!["gulshan".into(), "clifton".into()]);

        let l = listing(json!({ "id": 1, "area": "Gulshan-e-Iqbal Block 2" }));
        assert!(ListingFilter::matches(&l, &[pred.clone()]));

        let l = listing(json!({ "id": 2, "area": "Clifton Beach" }));
        assert!(ListingFilter::matches(&l, &[pred.clone()]));

        let l = listing(json!({ "id": 3, "area": "Korangi" }));
        assert!(!ListingFilter::matches(&l, &[pred.clone()]));

        let l = listing(json!({ "id": 4 }));
        assert!(!ListingFilter::matches(&l, &[pred]));
    }

    #[test]
    fn test_text_matches_title_or_city() {
        let pred = Predicate::Text("karachi".into());

        let l = listing(json!({ "id": 1, "title": "Flat in KARACHI center" }));
        assert!(ListingFilter::matches(&l, &[pred.clone()]));

        let l = listing(json!({ "id": 2, "title": "Cozy flat", "city": "Karachi" }));
        assert!(ListingFilter::matches(&l, &[pred.clone()]));

        let l = listing(json!({ "id": 3, "title": "Cozy flat", "city": "Lahore" }));
        assert!(!ListingFilter::matches(&l, &[pred]));
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let l = listing(json!({ "id": 1, "price": 50000 }));
        assert!(ListingFilter::matches(&l, &[Predicate::PriceMin(50000.0)]));
        assert!(ListingFilter::matches(&l, &[Predicate::PriceMax(50000.0)]));
        assert!(!ListingFilter::matches(&l, &[Predicate::PriceMin(50000.01)]));
        assert!(!ListingFilter::matches(&l, &[Predicate::PriceMax(49999.99)]));
    }

    #[test]
    fn test_unparseable_price_fails_bounds() {
        let l = listing(json!({ "id": 1, "price": "negotiable" }));
        assert!(!ListingFilter::matches(&l, &[Predicate::PriceMin(0.0)]));
        assert!(!ListingFilter::matches(&l, &[Predicate::PriceMax(1e12)]));
        // Without a price predicate the record still matches.
        assert!(ListingFilter::matches(&l, &[]));
    }

    #[test]
    fn test_availability_cutoff() {
        let by = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let l = listing(json!({ "id": 1, "available_from": "2026-05-15" }));
        assert!(ListingFilter::matches(&l, &[Predicate::AvailableBy(by)]));

        let l = listing(json!({ "id": 2, "available_from": "2026-06-01" }));
        assert!(ListingFilter::matches(&l, &[Predicate::AvailableBy(by)]));

        let l = listing(json!({ "id": 3, "available_from": "2026-07-01" }));
        assert!(!ListingFilter::matches(&l, &[Predicate::AvailableBy(by)]));

        // No availability on record fails the cutoff.
        let l = listing(json!({ "id": 4 }));
        assert!(!ListingFilter::matches(&l, &[Predicate::AvailableBy(by)]));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let l = listing(json!({
            "id": 1,
            "listing_type": "rent",
            "property_type": "apartment",
            "price": 30000
        }));
        let both = [
            Predicate::Kind(ListingKind::Rent),
            Predicate::Property(PropertyKind::Apartment),
        ];
        assert!(ListingFilter::matches(&l, &both));

        let conflicting = [
            Predicate::Kind(ListingKind::Rent),
            Predicate::Property(PropertyKind::House),
        ];
        assert!(!ListingFilter::matches(&l, &conflicting));
    }
}
