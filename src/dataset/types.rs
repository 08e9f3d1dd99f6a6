//! Flight record types
//!
//! Ownership is strictly nested: a `FlightRecord` owns one `Rocket` and one
//! `LaunchSite`, a `Rocket` owns its ordered `Payload`s. Nothing is shared
//! between records and nothing is mutated after load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: u32,
    pub mission_name: String,
    pub launch_date_unix: i64,
    pub launch_success: bool,
    pub rocket: Rocket,
    pub launch_site: LaunchSite,
}

impl FlightRecord {
    /// Returns true if any payload on this flight's rocket carries the catalog number.
    ///
    /// A flight without payloads never carries anything.
    pub fn carries(&self, norad_id: i64) -> bool {
        self.rocket.payloads.iter().any(|p| p.carries(norad_id))
    }

    /// Launch time as a UTC timestamp, if representable
    pub fn launch_date_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.launch_date_unix, 0)
    }
}

/// Launch vehicle and its cargo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    pub rocket_id: String,
    #[serde(default)]
    pub payloads: Vec<Payload>,
}

/// Cargo carried on a flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub payload_id: String,
    /// Satellite catalog numbers; one payload can deploy many objects
    #[serde(default)]
    pub norad_id: Vec<i64>,
}

impl Payload {
    pub fn carries(&self, norad_id: i64) -> bool {
        self.norad_id.contains(&norad_id)
    }
}

/// Where a flight launched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSite {
    pub site_id: String,
    pub site_name: String,
    #[serde(default)]
    pub site_name_long: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(payloads: Vec<Payload>) -> FlightRecord {
        FlightRecord {
            flight_number: 1,
            mission_name: "Test".to_string(),
            launch_date_unix: 1581951955,
            launch_success: true,
            rocket: Rocket {
                rocket_id: "falcon9".to_string(),
                payloads,
            },
            launch_site: LaunchSite {
                site_id: "ccafs_slc_40".to_string(),
                site_name: "CCAFS SLC 40".to_string(),
                site_name_long: None,
            },
        }
    }

    #[test]
    fn test_carries_checks_every_payload() {
        let flight = record(vec![
            Payload {
                payload_id: "A".to_string(),
                norad_id: vec![],
            },
            Payload {
                payload_id: "B".to_string(),
                norad_id: vec![10, 11],
            },
        ]);

        assert!(flight.carries(11));
        assert!(!flight.carries(12));
    }

    #[test]
    fn test_no_payloads_carries_nothing() {
        let flight = record(vec![]);
        assert!(!flight.carries(45178));
    }

    #[test]
    fn test_launch_date_utc() {
        let flight = record(vec![]);
        let date = flight.launch_date_utc().unwrap();
        assert_eq!(date.to_rfc3339(), "2020-02-17T15:05:55+00:00");
    }

    #[test]
    fn test_optional_fields_default() {
        let value = json!({
            "flight_number": 3,
            "mission_name": "Bare",
            "launch_date_unix": 0,
            "launch_success": false,
            "rocket": {"rocket_id": "falcon1"},
            "launch_site": {"site_id": "kwajalein_atoll", "site_name": "Kwajalein Atoll"}
        });

        let flight: FlightRecord = serde_json::from_value(value).unwrap();
        assert!(flight.rocket.payloads.is_empty());
        assert_eq!(flight.launch_site.site_name_long, None);
    }

    #[test]
    fn test_serializes_snake_case_shape() {
        let flight = record(vec![Payload {
            payload_id: "Starlink 4".to_string(),
            norad_id: vec![45178],
        }]);

        let value = serde_json::to_value(&flight).unwrap();
        assert_eq!(value["rocket"]["payloads"][0]["norad_id"][0], 45178);
        assert!(value["launch_site"]["site_name_long"].is_null());
    }
}
