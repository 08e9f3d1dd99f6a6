//! Query HTTP Routes
//!
//! The query envelope endpoint plus REST-style read routes. All of them go
//! through the same request validation before reaching the resolver.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Number, Value};

use crate::api::{ApiError, ApiResult, QueryHandler, QueryRequest};
use crate::dataset::FlightRecord;
use crate::observability::QueryOperation;

// ==================
// Shared State
// ==================

/// Query state shared across handlers
pub struct QueryState {
    pub handler: QueryHandler,
}

impl QueryState {
    pub fn new(handler: QueryHandler) -> Self {
        Self { handler }
    }
}

// ==================
// Query Routes
// ==================

/// Create query routes
pub fn query_routes(state: Arc<QueryState>) -> Router {
    Router::new()
        .route("/query", post(query_handler))
        .route("/space-flights", get(list_flights_handler))
        .route("/space-flights/:mission_name", get(get_flight_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn query_handler(
    State(state): State<Arc<QueryState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(envelope) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let response = state.handler.handle(envelope)?;
    Ok(Json(response.to_value()))
}

async fn list_flights_handler(
    State(state): State<Arc<QueryState>>,
    Query(params): Query<BTreeMap<String, String>>,
) -> ApiResult<Json<Vec<FlightRecord>>> {
    let variables = query_params_to_variables(params);
    let request = QueryRequest::from_variables(QueryOperation::SpaceFlights, &variables)?;

    let QueryRequest::SpaceFlights(filters) = request else {
        return Err(ApiError::InvalidRequest("expected a spaceFlights query".to_string()));
    };

    let flights = state
        .handler
        .resolver()
        .find_by_filters(&filters)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(flights))
}

async fn get_flight_handler(
    State(state): State<Arc<QueryState>>,
    Path(mission_name): Path<String>,
) -> ApiResult<Json<FlightRecord>> {
    state
        .handler
        .resolver()
        .find_by_mission(&mission_name)
        .cloned()
        .map(Json)
        .ok_or(ApiError::FlightNotFound(mission_name))
}

// ==================
// Helper Functions
// ==================

/// Query strings are untyped: integers become JSON numbers, everything else
/// stays a string and fails type validation downstream.
fn query_params_to_variables(params: BTreeMap<String, String>) -> Map<String, Value> {
    params
        .into_iter()
        .map(|(key, raw)| {
            let value = match raw.trim().parse::<i64>() {
                Ok(n) => Value::Number(Number::from(n)),
                Err(_) => Value::String(raw),
            };
            (key, value)
        })
        .collect()
}
