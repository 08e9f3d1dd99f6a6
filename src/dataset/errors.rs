//! Dataset error types
//!
//! Dataset errors only happen before any query is served. `serve` treats
//! them as fatal; `query` and `inspect` exit with an error.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading the flight dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset content is not a valid list of flight records
    #[error("Malformed dataset {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records share a flight number
    #[error("Duplicate flight_number {0} in dataset")]
    DuplicateFlightNumber(u32),

    /// Two records share a mission name
    #[error("Duplicate mission_name '{0}' in dataset")]
    DuplicateMissionName(String),
}

impl DatasetError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            DatasetError::Unreadable { .. } => "LAUNCH_DATASET_UNREADABLE",
            DatasetError::Malformed { .. } => "LAUNCH_DATASET_MALFORMED",
            DatasetError::DuplicateFlightNumber(_) => "LAUNCH_DATASET_DUPLICATE_FLIGHT",
            DatasetError::DuplicateMissionName(_) => "LAUNCH_DATASET_DUPLICATE_MISSION",
        }
    }
}
