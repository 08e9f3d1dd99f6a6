//! Flight filters
//!
//! Optional arguments are modelled explicitly instead of relying on
//! truthiness. The one deliberate quirk: a catalog number of `0` means
//! "no catalog filter", exactly like omitting it.

use serde::Serialize;

use crate::dataset::FlightRecord;

/// Inclusive launch-date window
///
/// Missing bounds are open. The comparison always runs; open bounds resolve
/// to `i64::MIN` / `i64::MAX` so every timestamp passes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl DateRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Concrete (lower, upper) bounds
    pub fn bounds(&self) -> (i64, i64) {
        (self.min.unwrap_or(i64::MIN), self.max.unwrap_or(i64::MAX))
    }

    pub fn contains(&self, launch_date_unix: i64) -> bool {
        let (lower, upper) = self.bounds();
        lower <= launch_date_unix && launch_date_unix <= upper
    }
}

/// Catalog-number filter activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFilter {
    /// No restriction
    Any,
    /// Keep flights with a payload carrying this catalog number
    Carrying(i64),
}

impl CatalogFilter {
    /// Builds the filter from a raw argument; `None` and `Some(0)` both disable it.
    pub fn from_arg(norad_id: Option<i64>) -> Self {
        match norad_id {
            None | Some(0) => CatalogFilter::Any,
            Some(id) => CatalogFilter::Carrying(id),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CatalogFilter::Carrying(_))
    }

    pub fn matches(&self, flight: &FlightRecord) -> bool {
        match self {
            CatalogFilter::Any => true,
            CatalogFilter::Carrying(id) => flight.carries(*id),
        }
    }
}

/// Arguments of the `spaceFlights` query
///
/// Keeps the raw values so observers see what the caller actually sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlightFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub norad_id: Option<i64>,
}

impl FlightFilters {
    /// No filters: matches the whole dataset
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_min_date(mut self, min_date: i64) -> Self {
        self.min_date = Some(min_date);
        self
    }

    pub fn with_max_date(mut self, max_date: i64) -> Self {
        self.max_date = Some(max_date);
        self
    }

    pub fn with_norad_id(mut self, norad_id: i64) -> Self {
        self.norad_id = Some(norad_id);
        self
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.min_date, self.max_date)
    }

    pub fn catalog(&self) -> CatalogFilter {
        CatalogFilter::from_arg(self.norad_id)
    }
}
