//! Observable events for the search lifecycle.
//!
//! Events are explicit and typed; free-form event names do not appear in
//! the log stream.

use super::logger::Severity;

/// Observable events in nestquery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & configuration
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Dataset file decoded into a store
    DatasetLoaded,

    // Search lifecycle
    /// A search was accepted and is executing
    SearchStart,
    /// A search completed with a page of results
    SearchComplete,
    /// A search was rejected before touching the store
    SearchRejected,

    // Store lifecycle
    /// A candidate or page fetch ran against the store
    StoreFetch,
    /// The store fetch failed; the error is propagating
    StoreFailure,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::SearchStart => "SEARCH_START",
            Event::SearchComplete => "SEARCH_COMPLETE",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::StoreFetch => "STORE_FETCH",
            Event::StoreFailure => "STORE_FAILURE",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SearchRejected => Severity::Warn,
            Event::StoreFailure => Severity::Error,
            _ => Severity::Info,
        }
    }
}
