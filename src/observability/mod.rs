//! Observability subsystem for launchdb
//!
//! Provides:
//! - Structured one-line JSON logging
//! - Typed lifecycle events
//! - The `QueryObserver` hook the resolver reports through
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No effect on query results
//! 3. Synchronous, no background threads
//!
//! # Usage
//!
//! ```ignore
//! use launchdb::observability::{log_event_with_fields, Event, Logger};
//!
//! log_event_with_fields(Event::DatasetLoaded, &[("records", "8")]);
//! Logger::warn("CONFIG_DEFAULTED", &[("reason", "no config file")]);
//! ```

mod events;
mod logger;
mod observer;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use observer::{
    LoggingObserver, NoopObserver, QueryEvent, QueryObserver, QueryOperation, QueryOutcome,
    RecordingObserver,
};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
///
/// Fatal events go to stderr, everything else to stdout.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::fatal(event.as_str(), fields);
    } else {
        Logger::info(event.as_str(), fields);
    }
}
