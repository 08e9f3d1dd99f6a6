//! CLI command implementations
//!
//! Every command follows the same boot sequence:
//! 1. Configuration load
//! 2. Dataset load and validation
//!
//! A failure in either step is FATAL. Nothing is served without a dataset.

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::api::QueryHandler;
use crate::dataset::{Dataset, DatasetLoader};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger, NoopObserver};
use crate::resolver::QueryResolver;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Query { config, request } => query(config.as_deref(), request),
        Command::Inspect { config } => inspect(config.as_deref()),
    }
}

/// Load the dataset and serve the HTTP API until stopped
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = Config::resolve(config_path)?;
    if let Some(port) = port {
        config.override_port(port)?;
    }
    let port_str = config.server.port.to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("port", port_str.as_str())]);

    let dataset = load_dataset(&config)?;
    let handler = QueryHandler::new(QueryResolver::new(dataset));
    let server = HttpServer::with_config(config.server, handler);

    log_event(Event::BootComplete);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Server(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::Server(e.to_string()))
}

/// Execute a single query envelope and exit
///
/// Stdout carries only the JSON response; nothing is logged there.
pub fn query(config_path: Option<&Path>, request: Option<String>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let dataset = read_dataset(&config)?;

    let request = match request {
        Some(request) => request,
        None => read_request()?,
    };

    let resolver = QueryResolver::with_observer(Arc::new(dataset), Arc::new(NoopObserver));
    let handler = QueryHandler::new(resolver).quiet();

    match handler.handle_str(&request) {
        Ok(response) => write_response(&response.to_value()),
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
            Err(e.into())
        }
    }
}

/// Load the dataset and print a summary
pub fn inspect(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let dataset = read_dataset(&config)?;

    write_response(&summarize(&dataset))
}

/// Startup load for `serve`: logs `DATASET_LOADED`, failure is FATAL
fn load_dataset(config: &Config) -> CliResult<Arc<Dataset>> {
    match DatasetLoader::load(&config.dataset_source()) {
        Ok(dataset) => Ok(Arc::new(dataset)),
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(Event::DatasetLoadFailed, &[("reason", reason.as_str())]);
            Err(e.into())
        }
    }
}

/// Load for one-shot commands. Stdout belongs to the response, so only a
/// failure is logged (ERROR, stderr).
fn read_dataset(config: &Config) -> CliResult<Dataset> {
    DatasetLoader::from_source(&config.dataset_source()).map_err(|e| {
        let reason = e.to_string();
        Logger::error(
            Event::DatasetLoadFailed.as_str(),
            &[("reason", reason.as_str())],
        );
        e.into()
    })
}

fn summarize(dataset: &Dataset) -> Value {
    let window = dataset.launch_window().map(|(first, last)| {
        json!({
            "first_launch": format_launch(first),
            "last_launch": format_launch(last),
        })
    });

    let missions: Vec<&str> = dataset
        .records()
        .iter()
        .map(|r| r.mission_name.as_str())
        .collect();

    json!({
        "source": dataset.source().to_string(),
        "flights": dataset.len(),
        "launch_window": window,
        "missions": missions,
    })
}

fn format_launch(unix: i64) -> Value {
    match chrono::DateTime::from_timestamp(unix, 0) {
        Some(date) => Value::String(date.to_rfc3339()),
        None => Value::from(unix),
    }
}
