//! CLI module for the student records service
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP server
//! - demo: Exercise every endpoint with the console client

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{demo, load_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
