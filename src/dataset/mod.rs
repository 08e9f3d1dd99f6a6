//! Dataset subsystem for launchdb
//!
//! Provides the immutable, in-memory collection of flight records that every
//! query runs against.
//!
//! # Lifecycle
//!
//! 1. Load once at startup (bundled JSON or a file named by config)
//! 2. Validate uniqueness of `flight_number` and `mission_name`
//! 3. Share read-only for the life of the process
//!
//! A dataset that cannot be loaded is a fatal startup condition; the server
//! never starts serving without one.

mod errors;
mod loader;
mod types;

pub use errors::{DatasetError, DatasetResult};
pub use loader::{Dataset, DatasetLoader, DatasetSource, BUNDLED_DATASET};
pub use types::{FlightRecord, LaunchSite, Payload, Rocket};
