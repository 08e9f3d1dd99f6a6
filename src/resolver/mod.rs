//! Query resolver subsystem for launchdb
//!
//! Resolves the two query operations over an immutable dataset.
//!
//! # Filter flow (strict order)
//!
//! 1. Start from the full dataset
//! 2. Apply the inclusive date range (always; open bounds by default)
//! 3. Apply the catalog-number filter when active
//! 4. Return survivors in dataset order
//!
//! # Guarantees
//!
//! - Deterministic: same inputs and dataset give the same output, order included
//! - No error path: absent and empty are successful outcomes

mod filters;
mod resolver;

pub use filters::{CatalogFilter, DateRange, FlightFilters};
pub use resolver::QueryResolver;
