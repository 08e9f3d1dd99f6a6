//! Query Semantics Tests
//!
//! Resolver behavior over the bundled dataset:
//! - Exact, case-sensitive mission lookup; absent is not an error
//! - Inclusive date window with open default bounds
//! - Catalog-number filter, with `0` meaning "no filter"
//! - Stable order and idempotence

use std::sync::Arc;

use launchdb::dataset::{Dataset, DatasetLoader, FlightRecord};
use launchdb::observability::{QueryOperation, QueryOutcome, RecordingObserver};
use launchdb::resolver::{FlightFilters, QueryResolver};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (QueryResolver, RecordingObserver) {
    let dataset = Arc::new(DatasetLoader::bundled().unwrap());
    let observer = RecordingObserver::new();
    let resolver = QueryResolver::with_observer(dataset, Arc::new(observer.clone()));
    (resolver, observer)
}

fn mission_names(flights: &[&FlightRecord]) -> Vec<String> {
    flights.iter().map(|f| f.mission_name.clone()).collect()
}

fn all_names(dataset: &Dataset) -> Vec<String> {
    dataset
        .records()
        .iter()
        .map(|f| f.mission_name.clone())
        .collect()
}

// =============================================================================
// spaceFlight
// =============================================================================

#[test]
fn test_returns_matching_flight_when_it_exists() {
    let (resolver, _) = setup();

    let flight = resolver.find_by_mission("Starlink 4").unwrap();
    assert_eq!(flight.mission_name, "Starlink 4");
    assert_eq!(flight.flight_number, 88);
    assert_eq!(flight.launch_site.site_id, "ccafs_slc_40");
    assert_eq!(flight.rocket.payloads[0].norad_id.first(), Some(&45178));
}

#[test]
fn test_returns_none_when_no_matching_flight() {
    let (resolver, observer) = setup();

    assert!(resolver.find_by_mission("Starlink 211").is_none());
    assert_eq!(observer.events()[0].outcome, QueryOutcome::NotFound);
}

/// Every mission in the dataset is found by its own name and nothing else.
#[test]
fn test_every_present_name_resolves_to_itself() {
    let (resolver, _) = setup();

    for record in resolver.dataset().records() {
        let found = resolver.find_by_mission(&record.mission_name).unwrap();
        assert_eq!(found, record);
    }
}

#[test]
fn test_mission_lookup_does_not_normalize() {
    let (resolver, _) = setup();

    for name in ["STARLINK 4", "starlink 4", " Starlink 4", "Starlink4", ""] {
        assert!(resolver.find_by_mission(name).is_none(), "{:?} matched", name);
    }
}

// =============================================================================
// spaceFlights: date window
// =============================================================================

#[test]
fn test_flights_before_end_date() {
    let (resolver, _) = setup();

    let flights = resolver.find_by_filters(&FlightFilters::none().with_max_date(1581951955));
    assert_eq!(
        mission_names(&flights),
        vec![
            "Starlink 2",
            "Crew Dragon In Flight Abort Test",
            "Starlink 3",
            "Starlink 4"
        ]
    );
    assert!(flights.iter().all(|f| f.launch_date_unix <= 1581951955));
}

#[test]
fn test_flights_after_start_date() {
    let (resolver, _) = setup();

    let flights = resolver.find_by_filters(&FlightFilters::none().with_min_date(1587583800));
    assert_eq!(mission_names(&flights), vec!["Starlink 6", "Starlink 7"]);
    assert!(flights.iter().all(|f| f.launch_date_unix >= 1587583800));
}

#[test]
fn test_flights_between_min_and_max_date() {
    let (resolver, _) = setup();

    let filters = FlightFilters::none()
        .with_min_date(1583556631)
        .with_max_date(1584533760);
    let flights = resolver.find_by_filters(&filters);

    // Both bounds are launch dates, so inclusivity is exercised at each end
    assert_eq!(mission_names(&flights), vec!["CRS-20", "Starlink 5"]);
}

/// Whatever bounds are passed, every returned flight lies inside them.
#[test]
fn test_results_always_inside_bounds() {
    let (resolver, _) = setup();
    let dates: Vec<i64> = resolver
        .dataset()
        .records()
        .iter()
        .map(|f| f.launch_date_unix)
        .collect();

    let mut probes = vec![i64::MIN, 0, i64::MAX];
    for d in &dates {
        probes.extend([d - 1, *d, d + 1]);
    }

    for &min in &probes {
        for &max in &probes {
            let filters = FlightFilters {
                min_date: Some(min),
                max_date: Some(max),
                norad_id: None,
            };
            let flights = resolver.find_by_filters(&filters);
            let expected = dates.iter().filter(|d| min <= **d && **d <= max).count();

            assert_eq!(flights.len(), expected);
            assert!(flights
                .iter()
                .all(|f| min <= f.launch_date_unix && f.launch_date_unix <= max));
        }
    }
}

#[test]
fn test_inverted_window_is_empty() {
    let (resolver, _) = setup();

    let filters = FlightFilters::none()
        .with_min_date(1584533760)
        .with_max_date(1583556631);
    assert!(resolver.find_by_filters(&filters).is_empty());
}

// =============================================================================
// spaceFlights: catalog numbers
// =============================================================================

#[test]
fn test_flights_with_matching_norad_id() {
    let (resolver, _) = setup();

    let flights = resolver.find_by_filters(&FlightFilters::none().with_norad_id(45178));
    assert_eq!(mission_names(&flights), vec!["Starlink 4"]);
}

/// Catalog numbers past the first one on a payload still match.
#[test]
fn test_matches_any_catalog_number_on_payload() {
    let (resolver, _) = setup();

    let flights = resolver.find_by_filters(&FlightFilters::none().with_norad_id(45237));
    assert_eq!(mission_names(&flights), vec!["Starlink 4"]);
}

#[test]
fn test_empty_when_no_matches() {
    let (resolver, observer) = setup();

    let flights = resolver.find_by_filters(&FlightFilters::none().with_norad_id(200));
    assert!(flights.is_empty());
    assert_eq!(observer.events()[0].outcome, QueryOutcome::Count(0));
}

#[test]
fn test_every_result_carries_requested_norad_id() {
    let (resolver, _) = setup();
    let ids: Vec<i64> = resolver
        .dataset()
        .records()
        .iter()
        .flat_map(|f| f.rocket.payloads.iter())
        .flat_map(|p| p.norad_id.iter().copied())
        .collect();

    for id in ids {
        let flights = resolver.find_by_filters(&FlightFilters::none().with_norad_id(id));
        assert!(!flights.is_empty());
        assert!(flights
            .iter()
            .all(|f| f.rocket.payloads.iter().any(|p| p.norad_id.contains(&id))));
    }
}

/// A flight whose payloads carry no catalog numbers is excluded while the
/// catalog filter is active and included otherwise.
#[test]
fn test_flight_without_catalog_numbers() {
    let (resolver, _) = setup();
    let abort_test = "Crew Dragon In Flight Abort Test";

    let filtered = resolver.find_by_filters(&FlightFilters::none().with_norad_id(45178));
    assert!(!mission_names(&filtered).contains(&abort_test.to_string()));

    let unfiltered = resolver.find_by_filters(&FlightFilters::none());
    assert!(mission_names(&unfiltered).contains(&abort_test.to_string()));
}

// =============================================================================
// spaceFlights: defaults, zero quirk, determinism
// =============================================================================

#[test]
fn test_all_flights_with_no_filters() {
    let (resolver, _) = setup();

    let flights = resolver.find_by_filters(&FlightFilters::none());
    assert_eq!(mission_names(&flights), all_names(resolver.dataset()));
}

#[test]
fn test_zero_norad_id_is_no_filter() {
    let (resolver, _) = setup();

    let zero = resolver.find_by_filters(&FlightFilters::none().with_norad_id(0));
    let none = resolver.find_by_filters(&FlightFilters::none());
    assert_eq!(zero, none);

    let zero_bounded = resolver.find_by_filters(
        &FlightFilters::none()
            .with_max_date(1581951955)
            .with_norad_id(0),
    );
    let bounded = resolver.find_by_filters(&FlightFilters::none().with_max_date(1581951955));
    assert_eq!(zero_bounded, bounded);
}

#[test]
fn test_queries_are_idempotent() {
    let (resolver, _) = setup();
    let filters = FlightFilters::none().with_min_date(1580000000);

    let first = resolver.find_by_filters(&filters);
    let second = resolver.find_by_filters(&filters);
    assert_eq!(first, second);

    assert_eq!(
        resolver.find_by_mission("CRS-20"),
        resolver.find_by_mission("CRS-20")
    );
}

/// One observer event per call, carrying the operation and raw arguments.
#[test]
fn test_each_query_reports_one_event() {
    let (resolver, observer) = setup();

    resolver.find_by_mission("Starlink 4");
    resolver.find_by_filters(&FlightFilters::none().with_min_date(1587583800));

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].operation, QueryOperation::SpaceFlight);
    assert_eq!(events[0].outcome, QueryOutcome::Found);
    assert_eq!(events[1].operation, QueryOperation::SpaceFlights);
    assert_eq!(events[1].arguments["min_date"], 1587583800);
    assert_eq!(events[1].outcome, QueryOutcome::Count(2));
}
