//! Query response shaping
//!
//! Results are always wrapped as `{"data": {"<operation>": <result>}}`.
//! An absent flight is `null`, an empty match is `[]`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dataset::FlightRecord;
use crate::observability::QueryOperation;

/// Success response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub data: Map<String, Value>,
}

impl QueryResponse {
    /// Response for `spaceFlight`
    pub fn space_flight(flight: Option<&FlightRecord>) -> Self {
        let value = match flight {
            Some(f) => serialize_flight(f),
            None => Value::Null,
        };
        Self::single(QueryOperation::SpaceFlight, value)
    }

    /// Response for `spaceFlights`
    pub fn space_flights(flights: &[&FlightRecord]) -> Self {
        let values = flights.iter().map(|f| serialize_flight(f)).collect();
        Self::single(QueryOperation::SpaceFlights, Value::Array(values))
    }

    fn single(operation: QueryOperation, value: Value) -> Self {
        let mut data = Map::new();
        data.insert(operation.as_str().to_string(), value);
        Self { data }
    }

    /// The result under the operation key
    pub fn result(&self, operation: QueryOperation) -> Option<&Value> {
        self.data.get(operation.as_str())
    }

    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        root.insert("data".to_string(), Value::Object(self.data.clone()));
        Value::Object(root)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

// FlightRecord holds only strings, integers, bools and lists, so this never
// hits the fallback.
fn serialize_flight(flight: &FlightRecord) -> Value {
    serde_json::to_value(flight).unwrap_or(Value::Null)
}
