//! CLI argument definitions using clap
//!
//! Commands:
//! - launchdb serve [--config <path>] [--port <port>]
//! - launchdb query [--config <path>] [--request <json>]
//! - launchdb inspect [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// launchdb - read-only query service over space-launch records
#[derive(Parser, Debug)]
#[command(name = "launchdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the query API over HTTP
    Serve {
        /// Path to configuration file (defaults to ./launchdb.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute a single query envelope and exit
    Query {
        /// Path to configuration file (defaults to ./launchdb.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Query envelope as JSON; read from stdin when omitted
        #[arg(long)]
        request: Option<String>,
    },

    /// Load the dataset and print a summary
    Inspect {
        /// Path to configuration file (defaults to ./launchdb.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
