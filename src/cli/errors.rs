//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::api::ApiError;
use crate::dataset::DatasetError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing or invalid
    #[error("{0}")]
    Config(String),

    /// Dataset could not be loaded; nothing can be served
    #[error("Dataset unavailable: {0}")]
    Dataset(#[from] DatasetError),

    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding failure on output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One-shot query was rejected
    #[error("{0}")]
    Query(#[from] ApiError),

    /// HTTP server failed to start or crashed
    #[error("Server failed: {0}")]
    Server(String),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "LAUNCH_CLI_CONFIG_ERROR",
            CliError::Dataset(e) => e.code(),
            CliError::Io(_) => "LAUNCH_CLI_IO_ERROR",
            CliError::Json(_) => "LAUNCH_CLI_IO_ERROR",
            CliError::Query(e) => e.code(),
            CliError::Server(_) => "LAUNCH_CLI_SERVER_FAILED",
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }
}
