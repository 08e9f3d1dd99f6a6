//! Query handler
//!
//! Validates an envelope, runs it through the resolver and shapes the
//! response. Logs `QUERY_BEGIN` on receipt and `QUERY_REJECTED` when the
//! envelope fails validation; the resolver's observer reports completion.

use serde_json::Value;

use crate::observability::{Event, Logger};
use crate::resolver::QueryResolver;

use super::errors::ApiResult;
use super::request::QueryRequest;
use super::response::QueryResponse;

/// Entry point for query envelopes
#[derive(Clone)]
pub struct QueryHandler {
    resolver: QueryResolver,
    log_requests: bool,
}

impl QueryHandler {
    pub fn new(resolver: QueryResolver) -> Self {
        Self {
            resolver,
            log_requests: true,
        }
    }

    /// Disable boundary logging (stdout stays reserved for responses)
    pub fn quiet(mut self) -> Self {
        self.log_requests = false;
        self
    }

    pub fn resolver(&self) -> &QueryResolver {
        &self.resolver
    }

    /// Handle a raw JSON string
    pub fn handle_str(&self, json: &str) -> ApiResult<QueryResponse> {
        self.log(Event::QueryReceived, &[("body", json)]);
        let request = QueryRequest::parse_str(json).map_err(|e| {
            self.reject(&e.to_string());
            e
        })?;
        Ok(self.execute(&request))
    }

    /// Handle a parsed JSON envelope
    pub fn handle(&self, envelope: Value) -> ApiResult<QueryResponse> {
        self.log(Event::QueryReceived, &[("body", envelope.to_string().as_str())]);
        let request = QueryRequest::parse(envelope).map_err(|e| {
            self.reject(&e.to_string());
            e
        })?;
        Ok(self.execute(&request))
    }

    /// Run an already-validated request
    pub fn execute(&self, request: &QueryRequest) -> QueryResponse {
        match request {
            QueryRequest::SpaceFlight { mission_name } => {
                QueryResponse::space_flight(self.resolver.find_by_mission(mission_name))
            }
            QueryRequest::SpaceFlights(filters) => {
                QueryResponse::space_flights(&self.resolver.find_by_filters(filters))
            }
        }
    }

    fn log(&self, event: Event, fields: &[(&str, &str)]) {
        if self.log_requests {
            Logger::info(event.as_str(), fields);
        }
    }

    fn reject(&self, reason: &str) {
        if self.log_requests {
            Logger::warn(Event::QueryRejected.as_str(), &[("reason", reason)]);
        }
    }
}
