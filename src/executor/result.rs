//! Result types for search execution.

use serde::{Deserialize, Serialize};

use crate::listing::Listing;

/// Pagination facts for one search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Matches across all pages, before slicing
    pub total: u64,
    /// 1-indexed page number that was requested
    pub page: u32,
    /// Requested page size
    pub limit: u32,
    /// `ceil(total / limit)`; zero when nothing matched
    pub total_pages: u32,
}

impl PageInfo {
    /// Computes page info for a total match count.
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)).min(u64::from(u32::MAX)) as u32
        };
        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Returns true if the requested page starts past the last match
    pub fn is_past_end(&self) -> bool {
        u64::from(self.page - 1) * u64::from(self.limit) >= self.total
    }
}

/// One page of search results plus its pagination facts.
///
/// `listings.len() <= limit` always; it equals `limit` on every page except
/// possibly the last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub listings: Vec<Listing>,
    pub page: PageInfo,
}

impl SearchResult {
    /// Creates a result from a sliced page and its page info
    pub fn new(listings: Vec<Listing>, page: PageInfo) -> Self {
        Self { listings, page }
    }

    /// Returns true if this page carries no listings
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Returns the number of listings on this page
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Returns an iterator over the listings on this page
    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }
}
