//! Query request parsing
//!
//! Variables follow GraphQL input rules: `Int` values are 32-bit integers,
//! `null` is the same as omitted for optional variables, and unknown
//! variables are rejected.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::observability::QueryOperation;
use crate::resolver::FlightFilters;

use super::errors::{ApiError, ApiResult};

/// A validated query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    /// `spaceFlight(mission_name: String!)`
    SpaceFlight { mission_name: String },
    /// `spaceFlights(max_date: Int, min_date: Int, norad_id: Int)`
    SpaceFlights(FlightFilters),
}

/// Raw envelope for parsing
#[derive(Debug, Deserialize)]
struct RawRequest {
    operation: String,
    #[serde(default)]
    variables: Option<Map<String, Value>>,
}

impl QueryRequest {
    /// Parse a request from a JSON string
    pub fn parse_str(json: &str) -> ApiResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid JSON: {}", e)))?;
        Self::parse(value)
    }

    /// Parse a request from a JSON envelope
    pub fn parse(value: Value) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let operation = QueryOperation::parse(&raw.operation)
            .ok_or_else(|| ApiError::UnknownOperation(raw.operation.clone()))?;
        let variables = raw.variables.unwrap_or_default();

        Self::from_variables(operation, &variables)
    }

    /// Build a request for a known operation from its variables
    pub fn from_variables(
        operation: QueryOperation,
        variables: &Map<String, Value>,
    ) -> ApiResult<Self> {
        match operation {
            QueryOperation::SpaceFlight => {
                reject_unknown(operation, variables, &["mission_name"])?;
                let mission_name = optional_string(variables, "mission_name")?.ok_or_else(|| {
                    ApiError::MissingVariable {
                        operation: operation.to_string(),
                        name: "mission_name".to_string(),
                    }
                })?;

                Ok(QueryRequest::SpaceFlight { mission_name })
            }
            QueryOperation::SpaceFlights => {
                reject_unknown(operation, variables, &["min_date", "max_date", "norad_id"])?;

                Ok(QueryRequest::SpaceFlights(FlightFilters {
                    min_date: optional_int(variables, "min_date")?,
                    max_date: optional_int(variables, "max_date")?,
                    norad_id: optional_int(variables, "norad_id")?,
                }))
            }
        }
    }

    pub fn operation(&self) -> QueryOperation {
        match self {
            QueryRequest::SpaceFlight { .. } => QueryOperation::SpaceFlight,
            QueryRequest::SpaceFlights(_) => QueryOperation::SpaceFlights,
        }
    }
}

fn reject_unknown(
    operation: QueryOperation,
    variables: &Map<String, Value>,
    allowed: &[&str],
) -> ApiResult<()> {
    // Map iteration is sorted, so the reported name is deterministic
    match variables.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(name) => Err(ApiError::UnknownVariable {
            operation: operation.to_string(),
            name: name.clone(),
        }),
        None => Ok(()),
    }
}

fn optional_string(variables: &Map<String, Value>, name: &str) -> ApiResult<Option<String>> {
    match variables.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ApiError::InvalidVariable {
            name: name.to_string(),
            expected: "a string",
        }),
    }
}

fn optional_int(variables: &Map<String, Value>, name: &str) -> ApiResult<Option<i64>> {
    match variables.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .filter(|v| i32::try_from(*v).is_ok())
            .map(Some)
            .ok_or_else(|| ApiError::InvalidVariable {
                name: name.to_string(),
                expected: "a 32-bit integer",
            }),
        Some(_) => Err(ApiError::InvalidVariable {
            name: name.to_string(),
            expected: "a 32-bit integer",
        }),
    }
}
