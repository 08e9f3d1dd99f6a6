//! # launchdb HTTP Server Module
//!
//! Exposes the query API over HTTP with axum.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check with dataset size
//! - `POST /query` - Query envelope (`spaceFlight` / `spaceFlights`)
//! - `GET /space-flights` - Filtered list via query string
//! - `GET /space-flights/:mission_name` - Single flight by mission name

pub mod config;
pub mod health_routes;
pub mod query_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use query_routes::QueryState;
pub use server::HttpServer;
