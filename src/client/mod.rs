//! Console client for the student records API
//!
//! `StudentClient` is a thin typed wrapper over reqwest; `run_demo` drives
//! it through every endpoint and prints a human-readable transcript.

mod api;
mod driver;

pub use api::{ClientError, ClientOutcome, StudentClient, DEFAULT_BASE_URL};
pub use driver::run_demo;
