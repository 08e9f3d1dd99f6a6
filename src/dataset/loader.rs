//! Dataset loader
//!
//! Reads flight records either from the JSON compiled into the binary or from
//! a file on disk, then enforces the uniqueness invariants. The resulting
//! `Dataset` is never mutated.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::observability::{log_event_with_fields, Event};

use super::errors::{DatasetError, DatasetResult};
use super::types::FlightRecord;

/// Flight data shipped with the binary
pub const BUNDLED_DATASET: &str = include_str!("../../data/space_flights.json");

/// Where a dataset came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The dataset compiled into the binary
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Bundled => write!(f, "<bundled>"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Immutable, ordered collection of flight records
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<FlightRecord>,
    source: DatasetSource,
}

impl Dataset {
    /// All records in load order
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Earliest and latest launch timestamps, if any records exist
    pub fn launch_window(&self) -> Option<(i64, i64)> {
        let min = self.records.iter().map(|r| r.launch_date_unix).min()?;
        let max = self.records.iter().map(|r| r.launch_date_unix).max()?;
        Some((min, max))
    }
}

/// Loads and validates datasets
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads from the given source and logs `DATASET_LOADED`.
    pub fn load(source: &DatasetSource) -> DatasetResult<Dataset> {
        let dataset = Self::from_source(source)?;

        let count = dataset.len().to_string();
        let origin = dataset.source().to_string();
        log_event_with_fields(
            Event::DatasetLoaded,
            &[("records", count.as_str()), ("source", origin.as_str())],
        );

        Ok(dataset)
    }

    /// Loads from the given source without logging
    pub fn from_source(source: &DatasetSource) -> DatasetResult<Dataset> {
        match source {
            DatasetSource::Bundled => Self::bundled(),
            DatasetSource::File(path) => Self::from_path(path),
        }
    }

    /// Loads the dataset compiled into the binary
    pub fn bundled() -> DatasetResult<Dataset> {
        Self::from_json(BUNDLED_DATASET, DatasetSource::Bundled)
    }

    /// Loads a dataset from a JSON file
    pub fn from_path(path: &Path) -> DatasetResult<Dataset> {
        let content = fs::read_to_string(path).map_err(|e| DatasetError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json(&content, DatasetSource::File(path.to_path_buf()))
    }

    /// Parses a JSON array of flight records and validates it
    pub fn from_json(content: &str, source: DatasetSource) -> DatasetResult<Dataset> {
        let records: Vec<FlightRecord> =
            serde_json::from_str(content).map_err(|e| DatasetError::Malformed {
                origin: source.to_string(),
                source: e,
            })?;

        Self::from_records(records, source)
    }

    /// Wraps already-built records, enforcing uniqueness
    pub fn from_records(
        records: Vec<FlightRecord>,
        source: DatasetSource,
    ) -> DatasetResult<Dataset> {
        Self::validate(&records)?;
        Ok(Dataset { records, source })
    }

    fn validate(records: &[FlightRecord]) -> DatasetResult<()> {
        let mut flight_numbers = HashSet::with_capacity(records.len());
        let mut mission_names = HashSet::with_capacity(records.len());

        for record in records {
            if !flight_numbers.insert(record.flight_number) {
                return Err(DatasetError::DuplicateFlightNumber(record.flight_number));
            }
            if !mission_names.insert(record.mission_name.as_str()) {
                return Err(DatasetError::DuplicateMissionName(
                    record.mission_name.clone(),
                ));
            }
        }

        Ok(())
    }
}
