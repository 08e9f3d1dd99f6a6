//! launchdb - read-only, deterministic query service over space-launch records
//!
//! The dataset is loaded once and never mutated. Two queries run over it:
//! `spaceFlight` (one mission by exact name) and `spaceFlights` (inclusive
//! date window plus optional satellite catalog number).

pub mod api;
pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod observability;
pub mod resolver;
