//! # HTTP Server
//!
//! Combines the query and health routers into one axum server.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::QueryHandler;
use crate::observability::{log_event_with_fields, Event, Logger};

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::query_routes::{query_routes, QueryState};

/// HTTP Server for the query API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(handler: QueryHandler) -> Self {
        Self::with_config(HttpServerConfig::default(), handler)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, handler: QueryHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, handler: QueryHandler) -> Router {
        let state = Arc::new(QueryState::new(handler));

        Router::new()
            .merge(health_routes(state.clone()))
            .merge(query_routes(state))
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.allows_any_origin() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", s.as_str())]);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dataset::DatasetLoader;
    use crate::observability::NoopObserver;
    use crate::resolver::QueryResolver;

    fn handler() -> QueryHandler {
        let dataset = Arc::new(DatasetLoader::bundled().unwrap());
        QueryHandler::new(QueryResolver::with_observer(dataset, Arc::new(NoopObserver))).quiet()
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(handler());
        assert_eq!(server.socket_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig {
            port: 8080,
            ..HttpServerConfig::default()
        };
        let server = HttpServer::with_config(config, handler());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "https://launches.example".to_string(),
                "not an origin\n".to_string(),
            ],
            ..HttpServerConfig::default()
        };
        let _router = HttpServer::with_config(config, handler()).router();
    }

    #[tokio::test]
    async fn test_invalid_host_rejected() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            ..HttpServerConfig::default()
        };
        let err = HttpServer::with_config(config, handler()).start().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
