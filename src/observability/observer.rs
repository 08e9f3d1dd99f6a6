//! Query observation hook
//!
//! The resolver reports every completed query through a `QueryObserver`
//! instead of writing logs itself, so its logic stays testable without
//! capturing output streams.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use uuid::Uuid;

use super::events::Event;
use super::logger::Logger;

/// Named query operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperation {
    /// Single flight by mission name
    SpaceFlight,
    /// Filtered list of flights
    SpaceFlights,
}

impl QueryOperation {
    /// Operation name as it appears in requests and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOperation::SpaceFlight => "spaceFlight",
            QueryOperation::SpaceFlights => "spaceFlights",
        }
    }

    /// Parses an operation name (exact match)
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "spaceFlight" => Some(QueryOperation::SpaceFlight),
            "spaceFlights" => Some(QueryOperation::SpaceFlights),
            _ => None,
        }
    }
}

impl fmt::Display for QueryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary of what a query produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Single lookup matched
    Found,
    /// Single lookup matched nothing
    NotFound,
    /// Number of records a filter query returned
    Count(usize),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Found => write!(f, "matching result"),
            QueryOutcome::NotFound => write!(f, "no matching results"),
            QueryOutcome::Count(n) => write!(f, "{} results", n),
        }
    }
}

/// One completed query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryEvent {
    pub request_id: Uuid,
    pub operation: QueryOperation,
    /// Arguments exactly as the caller supplied them
    pub arguments: Value,
    pub outcome: QueryOutcome,
}

impl QueryEvent {
    pub fn new(operation: QueryOperation, arguments: Value, outcome: QueryOutcome) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            operation,
            arguments,
            outcome,
        }
    }
}

/// Receives query events
pub trait QueryObserver: Send + Sync {
    fn observe(&self, event: &QueryEvent);
}

/// Writes `QUERY_COMPLETE` log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl QueryObserver for LoggingObserver {
    fn observe(&self, event: &QueryEvent) {
        let request_id = event.request_id.to_string();
        let args = event.arguments.to_string();
        let outcome = event.outcome.to_string();

        Logger::info(
            Event::QueryExecuted.as_str(),
            &[
                ("args", args.as_str()),
                ("operation", event.operation.as_str()),
                ("outcome", outcome.as_str()),
                ("request_id", request_id.as_str()),
            ],
        );
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl QueryObserver for NoopObserver {
    fn observe(&self, _event: &QueryEvent) {}
}

/// Keeps events in memory, in arrival order (test support)
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<QueryEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<QueryEvent> {
        self.events.lock().expect("recording observer lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("recording observer lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QueryObserver for RecordingObserver {
    fn observe(&self, event: &QueryEvent) {
        self.events
            .lock()
            .expect("recording observer lock poisoned")
            .push(event.clone());
    }
}
