//! # HTTP Server
//!
//! Combines the student, health and observability routers behind a CORS
//! layer and serves them with axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::student_routes::{student_routes, StudentsState};
use crate::observability::{log_event_with_fields, Event};
use crate::students::{StudentService, StudentStore};

/// HTTP server for the student records API
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<StudentsState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    ///
    /// The store is seeded with the four startup students unless
    /// `config.seed` is false.
    pub fn with_config(config: HttpServerConfig) -> Self {
        let store = if config.seed {
            StudentStore::seeded()
        } else {
            StudentStore::new()
        };
        let count = store.len().to_string();
        log_event_with_fields(Event::StoreSeeded, &[("students", count.as_str())]);

        let state = Arc::new(StudentsState::new(StudentService::new(store)));
        Self::with_state(config, state)
    }

    /// Create a server over existing shared state
    pub fn with_state(config: HttpServerConfig, state: Arc<StudentsState>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<StudentsState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(Arc::clone(&state)))
            .nest("/observability", observability_routes(Arc::clone(&state)))
            .nest("/api", student_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared state behind the router
    pub fn state(&self) -> Arc<StudentsState> {
        Arc::clone(&self.state)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(
            Event::Serving,
            &[("addr", bound.as_str()), ("api", "/api/students")],
        );

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "127.0.0.1:7152");
        assert_eq!(server.state().service.count().unwrap(), 4);
    }

    #[test]
    fn test_server_without_seed() {
        let config = HttpServerConfig {
            seed: false,
            ..HttpServerConfig::with_port(8080)
        };
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
        assert_eq!(server.state().service.count().unwrap(), 0);
    }

    #[test]
    fn test_router_builds_with_permissive_cors() {
        let config = HttpServerConfig {
            cors_origins: vec![],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }
}
