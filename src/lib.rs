//! student-api - An in-memory student records HTTP service
//!
//! - `students`: records, validation and the locked store
//! - `http_server`: axum routes over the student service
//! - `client`: typed reqwest client and demo script
//! - `cli`: `serve` and `demo` commands
//! - `observability`: JSON logging and counters

pub mod cli;
pub mod client;
pub mod http_server;
pub mod observability;
pub mod students;
