//! Query resolver
//!
//! Pure scans over the shared dataset. Every call reports one `QueryEvent`
//! to the injected observer; nothing else has side effects.

use std::sync::Arc;

use serde_json::json;

use crate::dataset::{Dataset, FlightRecord};
use crate::observability::{
    LoggingObserver, QueryEvent, QueryObserver, QueryOperation, QueryOutcome,
};

use super::filters::FlightFilters;

/// Resolves `spaceFlight` and `spaceFlights` over an immutable dataset
#[derive(Clone)]
pub struct QueryResolver {
    dataset: Arc<Dataset>,
    observer: Arc<dyn QueryObserver>,
}

impl QueryResolver {
    /// Create a resolver that logs through `LoggingObserver`
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_observer(dataset, Arc::new(LoggingObserver))
    }

    /// Create a resolver reporting to a custom observer
    pub fn with_observer(dataset: Arc<Dataset>, observer: Arc<dyn QueryObserver>) -> Self {
        Self { dataset, observer }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the flight whose mission name equals `mission_name` exactly.
    ///
    /// No match is `None`, a successful outcome.
    pub fn find_by_mission(&self, mission_name: &str) -> Option<&FlightRecord> {
        let result = self
            .dataset
            .records()
            .iter()
            .find(|flight| flight.mission_name == mission_name);

        let outcome = if result.is_some() {
            QueryOutcome::Found
        } else {
            QueryOutcome::NotFound
        };
        self.observer.observe(&QueryEvent::new(
            QueryOperation::SpaceFlight,
            json!({ "mission_name": mission_name }),
            outcome,
        ));

        result
    }

    /// Returns flights inside the date window that match the catalog filter,
    /// in dataset order.
    pub fn find_by_filters(&self, filters: &FlightFilters) -> Vec<&FlightRecord> {
        let range = filters.date_range();
        let catalog = filters.catalog();

        let mut result: Vec<&FlightRecord> = self
            .dataset
            .records()
            .iter()
            .filter(|flight| range.contains(flight.launch_date_unix))
            .collect();

        if catalog.is_active() {
            result.retain(|flight| catalog.matches(flight));
        }

        self.observer.observe(&QueryEvent::new(
            QueryOperation::SpaceFlights,
            serde_json::to_value(filters).unwrap_or_else(|_| json!({})),
            QueryOutcome::Count(result.len()),
        ));

        result
    }
}
