//! Observability subsystem for nestquery
//!
//! Structured JSON logging, typed search events, and deterministic
//! counter-only metrics.
//!
//! # Principles
//!
//! 1. Observability is read-only and never affects execution
//! 2. Logs are synchronous, one JSON object per line
//! 3. Output key order is deterministic
//! 4. Counters only increase, and reset only on process start

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a search lifecycle event at its own severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    match event.severity() {
        Severity::Error | Severity::Fatal => {
            Logger::log_stderr(event.severity(), event.as_str(), fields)
        }
        severity => Logger::log(severity, event.as_str(), fields),
    }
}
