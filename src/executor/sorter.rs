//! Stable sorting for search results.
//!
//! Every order is applied with a stable sort: listings equal under the
//! comparator keep their relative candidate order. Pagination depends on
//! this: an unstable sort could return different items for the same page
//! across identical requests, or duplicate/drop a record at a page boundary.
//!
//! Missing values take a documented fallback key that mirrors MySQL NULL
//! ordering, so the in-memory pass and the SQL pushdown agree:
//! a missing price orders as the lowest value, a missing timestamp as the
//! epoch.

use std::cmp::Ordering;

use crate::listing::Listing;
use crate::query::SortOrder;

/// Sorts listings for a search order
pub struct ListingSorter;

impl ListingSorter {
    /// Sorts listings in place according to the requested order.
    pub fn sort(listings: &mut [Listing], order: SortOrder) {
        match order {
            SortOrder::Featured => {
                listings.sort_by(|a, b| b.is_featured.cmp(&a.is_featured));
            }
            SortOrder::PriceLow => {
                listings.sort_by(|a, b| Self::compare_price(a.price, b.price));
            }
            SortOrder::PriceHigh => {
                listings.sort_by(|a, b| Self::compare_price(b.price, a.price));
            }
            SortOrder::Newest => {
                listings.sort_by(|a, b| b.posted_key().cmp(&a.posted_key()));
            }
        }
    }

    /// Compares optional prices with `None` ordered lowest.
    ///
    /// Decoded prices are always finite, so `partial_cmp` on the values
    /// themselves cannot fail; equal treatment is the safe fallback.
    fn compare_price(a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        }
    }
}
