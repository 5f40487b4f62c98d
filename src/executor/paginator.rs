//! Pagination over a filtered-and-sorted sequence.

use crate::listing::Listing;

use super::result::PageInfo;

/// Slices pages out of an ordered match sequence
pub struct Paginator;

impl Paginator {
    /// Returns the zero-based offset of a 1-indexed page.
    pub fn offset(page: u32, limit: u32) -> u64 {
        u64::from(page - 1) * u64::from(limit)
    }

    /// Slices the requested page out of the full ordered match sequence.
    ///
    /// A page past the end yields an empty slice, not an error. The page
    /// info totals always describe the whole sequence, not the slice.
    pub fn slice(matches: Vec<Listing>, page: u32, limit: u32) -> (Vec<Listing>, PageInfo) {
        let info = PageInfo::new(matches.len() as u64, page, limit);
        let start = Self::offset(page, limit) as usize;
        let page_items: Vec<Listing> = matches
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();
        (page_items, info)
    }
}
