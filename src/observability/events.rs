//! Observable lifecycle events for launchdb
//!
//! Events are explicit and typed; the string form is what appears in the
//! `event` key of every log line.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup complete
    BootComplete,
    /// Configuration loaded
    ConfigLoaded,

    // Dataset
    /// Dataset loaded and validated
    DatasetLoaded,
    /// Dataset could not be loaded (FATAL)
    DatasetLoadFailed,

    // Query operations
    /// Query received at the boundary
    QueryReceived,
    /// Query resolved
    QueryExecuted,
    /// Query rejected at the boundary
    QueryRejected,

    // Server
    /// HTTP server accepting requests
    Serving,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "LAUNCHDB_STARTUP_BEGIN",
            Event::BootComplete => "LAUNCHDB_STARTUP_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetLoadFailed => "DATASET_LOAD_FAILED",
            Event::QueryReceived => "QUERY_BEGIN",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::Serving => "LAUNCHDB_SERVING",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetLoadFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
