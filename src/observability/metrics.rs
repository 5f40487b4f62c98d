//! Metrics registry.
//!
//! Counters only: monotonic, exact, and reset only on process start.
//! Relaxed atomics: metrics never synchronize execution.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for the search pipeline
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Searches that ran to completion
    searches_executed: AtomicU64,
    /// Searches rejected before store access
    searches_rejected: AtomicU64,
    /// Candidate/page fetches issued to a store
    store_fetches: AtomicU64,
    /// Store fetches that failed
    store_failures: AtomicU64,
    /// Listings returned across all completed searches
    listings_returned: AtomicU64,
}

impl MetricsRegistry {
    /// Creates a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed search and the size of its page
    pub fn record_search(&self, returned: u64) {
        self.searches_executed.fetch_add(1, Ordering::Relaxed);
        self.listings_returned.fetch_add(returned, Ordering::Relaxed);
    }

    /// Records a rejected search
    pub fn record_rejection(&self) {
        self.searches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one store fetch
    pub fn record_store_fetch(&self) {
        self.store_fetches.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one failed store fetch
    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches_executed: self.searches_executed.load(Ordering::Relaxed),
            searches_rejected: self.searches_rejected.load(Ordering::Relaxed),
            store_fetches: self.store_fetches.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
            listings_returned: self.listings_returned.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time counter values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub searches_executed: u64,
    pub searches_rejected: u64,
    pub store_fetches: u64,
    pub store_failures: u64,
    pub listings_returned: u64,
}
