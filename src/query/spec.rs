//! Search specification and predicate lowering.
//!
//! A [`SearchSpec`] captures every recognized filter, sort, and pagination
//! option. [`SearchSpec::predicates`] lowers the active filters into one
//! flat [`Predicate`] list; that list is the only predicate source in the
//! crate, consumed by the in-memory filter pass and the SQL composer alike.

use chrono::NaiveDate;

use crate::listing::{ListingKind, PropertyKind};

/// Restriction on the listing kind dimension.
///
/// An omitted scope and an explicit `All` are equivalent: neither imposes
/// any restriction, so records whose kind decoded to `Other` are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindScope {
    /// No restriction
    #[default]
    All,
    /// Restrict to one listing kind
    Only(ListingKind),
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Featured listings first; ties keep candidate order
    #[default]
    Featured,
    /// Ascending numeric price; missing price first
    PriceLow,
    /// Descending numeric price; missing price last
    PriceHigh,
    /// Most recently posted first; missing timestamp last
    Newest,
}

impl SortOrder {
    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::Newest => "newest",
        }
    }

    /// Parses a wire value strictly; unrecognized values return `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "featured" => Some(SortOrder::Featured),
            "price-low" => Some(SortOrder::PriceLow),
            "price-high" => Some(SortOrder::PriceHigh),
            "newest" => Some(SortOrder::Newest),
            _ => None,
        }
    }
}

/// One active filter.
///
/// Predicates combine with AND; the substrings inside `AreaAny` combine
/// with OR. Text needles are lowercased at lowering time so evaluation and
/// SQL rendering agree on case handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Exclude listings owned by this user
    NotOwner(i64),
    /// Listing kind equality
    Kind(ListingKind),
    /// Property kind equality
    Property(PropertyKind),
    /// Exact bedroom count
    Bedrooms(u32),
    /// Exact bathroom count
    Bathrooms(u32),
    /// Area contains any of these substrings, case-insensitive (lowercased)
    AreaAny(Vec<String>),
    /// Title or city contains this substring, case-insensitive (lowercased)
    Text(String),
    /// Price is at least this value (inclusive)
    PriceMin(f64),
    /// Price is at most this value (inclusive)
    PriceMax(f64),
    /// Available on or before this date
    AvailableBy(NaiveDate),
}

/// Filter/sort/paginate specification for one search.
///
/// Defaults: no filters, `Featured` sort, page 1, limit 6. A price bound of
/// exactly `Some(0.0)` is a real bound: presence is definedness, never
/// truthiness.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec {
    pub exclude_owner: Option<i64>,
    pub kind_scope: KindScope,
    pub property_kind: Option<PropertyKind>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub location_areas: Vec<String>,
    pub search_term: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub available_by: Option<NaiveDate>,
    pub sort: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchSpec {
    fn default() -> Self {
        Self {
            exclude_owner: None,
            kind_scope: KindScope::All,
            property_kind: None,
            bedrooms: None,
            bathrooms: None,
            location_areas: Vec::new(),
            search_term: None,
            price_min: None,
            price_max: None,
            available_by: None,
            sort: SortOrder::Featured,
            page: 1,
            limit: 6,
        }
    }
}

impl SearchSpec {
    /// Creates a spec with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes listings owned by the given user
    pub fn without_owner(mut self, owner_id: i64) -> Self {
        self.exclude_owner = Some(owner_id);
        self
    }

    /// Restricts to one listing kind
    pub fn with_kind(mut self, kind: ListingKind) -> Self {
        self.kind_scope = KindScope::Only(kind);
        self
    }

    /// Restricts to one property kind
    pub fn with_property_kind(mut self, kind: PropertyKind) -> Self {
        self.property_kind = Some(kind);
        self
    }

    /// Requires an exact bedroom count
    pub fn with_bedrooms(mut self, count: u32) -> Self {
        self.bedrooms = Some(count);
        self
    }

    /// Requires an exact bathroom count
    pub fn with_bathrooms(mut self, count: u32) -> Self {
        self.bathrooms = Some(count);
        self
    }

    /// Adds a location area substring (OR within this category)
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.location_areas.push(area.into());
        self
    }

    /// Sets the free-text search term
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Sets the inclusive price range; either bound may be `None`
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Requires availability on or before the given date
    pub fn available_by(mut self, date: NaiveDate) -> Self {
        self.available_by = Some(date);
        self
    }

    /// Sets the sort order
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the 1-indexed page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Lowers the active filters into a flat predicate list.
    ///
    /// Absent options lower to no predicate. A blank search term and an
    /// empty area list impose no restriction. Text needles are trimmed and
    /// lowercased here, once.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(owner_id) = self.exclude_owner {
            predicates.push(Predicate::NotOwner(owner_id));
        }
        if let KindScope::Only(kind) = self.kind_scope {
            predicates.push(Predicate::Kind(kind));
        }
        if let Some(kind) = self.property_kind {
            predicates.push(Predicate::Property(kind));
        }
        if let Some(count) = self.bedrooms {
            predicates.push(Predicate::Bedrooms(count));
        }
        if let Some(count) = self.bathrooms {
            predicates.push(Predicate::Bathrooms(count));
        }

        let areas: Vec<String> = self
            .location_areas
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        if !areas.is_empty() {
            predicates.push(Predicate::AreaAny(areas));
        }

        if let Some(term) = &self.search_term {
            let needle = term.trim().to_lowercase();
            if !needle.is_empty() {
                predicates.push(Predicate::Text(needle));
            }
        }

        if let Some(min) = self.price_min {
            predicates.push(Predicate::PriceMin(min));
        }
        if let Some(max) = self.price_max {
            predicates.push(Predicate::PriceMax(max));
        }
        if let Some(date) = self.available_by {
            predicates.push(Predicate::AvailableBy(date));
        }

        predicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = SearchSpec::new();
        assert_eq!(spec.page, 1);
        assert_eq!(spec.limit, 6);
        assert_eq!(spec.sort, SortOrder::Featured);
        assert_eq!(spec.kind_scope, KindScope::All);
        assert!(spec.predicates().is_empty());
    }

    #[test]
    fn test_sort_order_wire_values() {
        assert_eq!(SortOrder::parse("price-low"), Some(SortOrder::PriceLow));
        assert_eq!(SortOrder::parse("newest"), Some(SortOrder::Newest));
        assert_eq!(SortOrder::parse("cheapest"), None);
        assert_eq!(SortOrder::PriceHigh.as_str(), "price-high");
    }

    #[test]
    fn test_lowering_one_predicate_per_category() {
        let spec = SearchSpec::new()
            .without_owner(42)
            .with_kind(ListingKind::Rent)
            .with_property_kind(PropertyKind::Apartment)
            .with_bedrooms(3)
            .with_bathrooms(2)
            .with_area("Gulshan")
            .with_area("Clifton")
            .with_search_term("sea view")
            .with_price_range(Some(10_000.0), Some(90_000.0))
            .available_by(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());

        let predicates = spec.predicates();
        assert_eq!(predicates.len(), 9);
        assert!(predicates.contains(&Predicate::NotOwner(42)));
        assert!(predicates.contains(&Predicate::Kind(ListingKind::Rent)));
        assert!(predicates
            .contains(&Predicate::AreaAny(vec!["gulshan".into(), "clifton".into()])));
        assert!(predicates.contains(&Predicate::Text("sea view".into())));
    }

    #[test]
    fn test_blank_term_and_empty_areas_lower_to_nothing() {
        let spec = SearchSpec::new().with_search_term("   ");
        assert!(spec.predicates().is_empty());

        let spec = SearchSpec {
            location_areas: vec!["  ".into(), String::new()],
            ..SearchSpec::default()
        };
        assert!(spec.predicates().is_empty());
    }

    #[test]
    fn test_zero_price_bound_lowers_to_real_predicate() {
        let spec = SearchSpec::new().with_price_range(Some(0.0), Some(0.0));
        let predicates = spec.predicates();
        assert!(predicates.contains(&Predicate::PriceMin(0.0)));
        assert!(predicates.contains(&Predicate::PriceMax(0.0)));
    }

    #[test]
    fn test_all_scope_lowers_to_no_kind_predicate() {
        let spec = SearchSpec::new();
        assert!(!spec
            .predicates()
            .iter()
            .any(|p| matches!(p, Predicate::Kind(_))));
    }
}
