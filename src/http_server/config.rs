//! Listener settings
//!
//! Taken from the `server` object of `launchdb.json`. Missing keys fall back
//! to `0.0.0.0:4000` with CORS open to any origin.

use serde::{Deserialize, Serialize};

/// Where the query API listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// `host:port` as handed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }

    /// Rejects settings the listener could never bind
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("server.port must be > 0".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("server.host must not be empty".to_string());
        }
        Ok(())
    }
}
