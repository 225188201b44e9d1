//! # HTTP Server Module
//!
//! Axum server exposing the student records API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/students/*` - Student records
//! - `/observability/*` - Health and counters

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
pub use student_routes::{ErrorResponse, MessageResponse, StudentsState};
