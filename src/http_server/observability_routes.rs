//! Observability HTTP Routes
//!
//! Health check and request counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use super::student_routes::StudentsState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: String,
    pub students: usize,
}

/// Create observability routes
pub fn observability_routes(state: Arc<StudentsState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check route (also available at root /health)
pub fn health_routes(state: Arc<StudentsState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<StudentsState>>) -> impl IntoResponse {
    // A poisoned store still answers health checks, but reports degraded.
    let (status, students) = match state.service.count() {
        Ok(count) => ("ok", count),
        Err(_) => ("degraded", 0),
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at.to_rfc3339(),
        students,
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<Arc<StudentsState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics_json()))
}
