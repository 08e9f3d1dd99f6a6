//! API error types
//!
//! Every API error is a client error raised before the resolver runs.
//! "No such mission" and "no matches" are not errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Query API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request body is not a valid envelope
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Operation name is not known
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Required variable was not supplied
    #[error("Missing required variable '{name}' for {operation}")]
    MissingVariable { operation: String, name: String },

    /// Variable is not accepted by the operation
    #[error("Unknown variable '{name}' for {operation}")]
    UnknownVariable { operation: String, name: String },

    /// Variable has the wrong type
    #[error("Variable '{name}' must be {expected}")]
    InvalidVariable { name: String, expected: &'static str },

    /// REST lookup of a mission that does not exist
    #[error("No flight with mission_name '{0}'")]
    FlightNotFound(String),
}

impl ApiError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "LAUNCH_INVALID_REQUEST",
            ApiError::UnknownOperation(_) => "LAUNCH_UNKNOWN_OPERATION",
            ApiError::MissingVariable { .. } => "LAUNCH_MISSING_VARIABLE",
            ApiError::UnknownVariable { .. } => "LAUNCH_UNKNOWN_VARIABLE",
            ApiError::InvalidVariable { .. } => "LAUNCH_INVALID_VARIABLE",
            ApiError::FlightNotFound(_) => "LAUNCH_FLIGHT_NOT_FOUND",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::FlightNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            error_code: err.code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
