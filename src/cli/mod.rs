//! CLI module for launchdb
//!
//! Provides command-line interface for:
//! - serve: Load the dataset and serve the HTTP API
//! - query: One-shot query over stdin/stdout
//! - inspect: Load the dataset and print a summary

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{inspect, query, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{read_request, write_error, write_response};
