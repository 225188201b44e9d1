//! CLI argument definitions using clap
//!
//! Commands:
//! - student-api serve [--config <path>] [--host <host>] [--port <port>] [--no-seed]
//! - student-api demo [--base-url <url>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::client::DEFAULT_BASE_URL;

/// In-memory student records service
#[derive(Parser, Debug)]
#[command(name = "student-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty store instead of the four startup students
        #[arg(long)]
        no_seed: bool,
    },

    /// Run the demo client against a running server
    Demo {
        /// Base URL of the student endpoints
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "student-api",
            "serve",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--no-seed",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                host,
                port,
                no_seed,
            } => {
                assert!(config.is_none());
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert!(no_seed);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_demo_default_url() {
        let cli = Cli::try_parse_from(["student-api", "demo"]).unwrap();
        match cli.command {
            Command::Demo { base_url } => assert_eq!(base_url, DEFAULT_BASE_URL),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["student-api", "serve", "--port", "70000"]).is_err());
    }
}
