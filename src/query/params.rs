//! Raw request-parameter parsing.
//!
//! An HTTP route handler receives a flat map of string parameters; this
//! module turns that map into a typed [`SearchSpec`]. Parsing is strict:
//! unknown parameter names and unparseable values reject with the offending
//! key. A textual `"0"` price bound parses to a real bound.
//!
//! The hard cap on `limit` lives here, not in the executor. The core
//! accepts any positive limit, but an edge surface should not let one
//! request page through an unbounded slice of the store.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::listing::{ListingKind, PropertyKind};

use super::errors::{QueryError, QueryResult};
use super::spec::{KindScope, SearchSpec, SortOrder};

/// Caps applied while parsing raw parameters.
#[derive(Debug, Clone, Copy)]
pub struct ParamLimits {
    /// Page size used when the request omits `limit`
    pub default_limit: u32,
    /// Largest accepted `limit`
    pub max_limit: u32,
}

impl Default for ParamLimits {
    fn default() -> Self {
        Self {
            default_limit: 6,
            max_limit: 100,
        }
    }
}

/// Parses a flat map of raw string parameters into a search specification.
///
/// Recognized keys: `exclude_owner`, `listing_type`, `property_type`,
/// `bedrooms`, `bathrooms`, `location_areas` (comma-separated), `search`,
/// `price_min`, `price_max`, `available_by` (`YYYY-MM-DD`), `sort`, `page`,
/// `limit`.
pub fn parse_params(
    params: &BTreeMap<String, String>,
    limits: &ParamLimits,
) -> QueryResult<SearchSpec> {
    let mut spec = SearchSpec::new().with_limit(limits.default_limit);

    for (key, value) in params {
        match key.as_str() {
            "exclude_owner" => {
                spec.exclude_owner = Some(parse_int(key, value)?);
            }
            "listing_type" => {
                spec.kind_scope = parse_kind_scope(value)?;
            }
            "property_type" => {
                let kind = PropertyKind::parse(value)
                    .ok_or_else(|| QueryError::param_invalid(key, "unknown property type"))?;
                spec.property_kind = Some(kind);
            }
            "bedrooms" => {
                spec.bedrooms = Some(parse_count(key, value)?);
            }
            "bathrooms" => {
                spec.bathrooms = Some(parse_count(key, value)?);
            }
            "location_areas" => {
                spec.location_areas = value
                    .split(',')
                    .map(|a| a.trim().to_string())
                    .filter(|a| !a.is_empty())
                    .collect();
            }
            "search" => {
                spec.search_term = Some(value.clone());
            }
            "price_min" => {
                spec.price_min = Some(parse_price(key, value)?);
            }
            "price_max" => {
                spec.price_max = Some(parse_price(key, value)?);
            }
            "available_by" => {
                let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|_| QueryError::param_invalid(key, "expected YYYY-MM-DD"))?;
                spec.available_by = Some(date);
            }
            "sort" => {
                spec.sort = SortOrder::parse(value.trim())
                    .ok_or_else(|| QueryError::param_invalid(key, "unknown sort order"))?;
            }
            "page" => {
                spec.page = parse_count(key, value)?;
            }
            "limit" => {
                let limit = parse_count(key, value)?;
                if limit > limits.max_limit {
                    return Err(QueryError::param_invalid(
                        key,
                        format!("limit {} exceeds maximum {}", limit, limits.max_limit),
                    ));
                }
                spec.limit = limit;
            }
            other => return Err(QueryError::param_unknown(other)),
        }
    }

    Ok(spec)
}

fn parse_kind_scope(value: &str) -> QueryResult<KindScope> {
    let value = value.trim();
    if value == "all" {
        return Ok(KindScope::All);
    }
    ListingKind::parse(value)
        .map(KindScope::Only)
        .ok_or_else(|| QueryError::param_invalid("listing_type", "expected all, rent, or sale"))
}

fn parse_int(key: &str, value: &str) -> QueryResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| QueryError::param_invalid(key, "not an integer"))
}

fn parse_count(key: &str, value: &str) -> QueryResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| QueryError::param_invalid(key, "not a non-negative integer"))
}

fn parse_price(key: &str, value: &str) -> QueryResult<f64> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| QueryError::param_invalid(key, "not a number"))?;
    if !parsed.is_finite() {
        return Err(QueryError::param_invalid(key, "not a finite number"));
    }
    Ok(parsed)
}
