//! Configuration file
//!
//! ```json
//! {
//!   "dataset_path": "./data/space_flights.json",
//!   "server": {"host": "0.0.0.0", "port": 4000, "cors_origins": []}
//! }
//! ```
//!
//! Every field is optional. Without `dataset_path` the bundled dataset is used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSource;
use crate::http_server::HttpServerConfig;

use super::errors::{CliError, CliResult};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./launchdb.json";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON dataset on disk (optional, bundled dataset when absent)
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,
}

impl Config {
    /// Resolve configuration for a command.
    ///
    /// An explicit path must exist. Without one, `./launchdb.json` is used
    /// when present and defaults otherwise.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        self.server.validate().map_err(CliError::Config)
    }

    /// Apply a `--port` flag on top of the file settings
    pub fn override_port(&mut self, port: u16) -> CliResult<()> {
        self.server.port = port;
        self.validate()
    }

    /// Where the dataset should be loaded from
    pub fn dataset_source(&self) -> DatasetSource {
        match &self.dataset_path {
            Some(path) => DatasetSource::File(path.clone()),
            None => DatasetSource::Bundled,
        }
    }
}
