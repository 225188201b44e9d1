//! CLI command implementations
//!
//! `serve` loads configuration, seeds the store and runs the HTTP server.
//! `demo` runs the console client against a running server.

use std::fs;
use std::io;
use std::path::Path;

use crate::client::{run_demo, StudentClient};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Load and validate a JSON configuration file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;

    Ok(config)
}

/// Resolve the effective server configuration: file (or defaults), then
/// command-line overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    no_seed: bool,
) -> CliResult<HttpServerConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if no_seed {
        config.seed = false;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            no_seed,
        } => serve(config.as_deref(), host, port, no_seed),
        Command::Demo { base_url } => demo(&base_url),
    }
}

/// Start the HTTP server and serve until it fails
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    no_seed: bool,
) -> CliResult<()> {
    log_event(Event::ServiceStart);

    let config = resolve_config(config_path, host, port, no_seed)?;
    let addr = config.socket_addr();
    log_event_with_fields(Event::ConfigLoaded, &[("addr", addr.as_str())]);

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("reason", reason.as_str())]);
        CliError::boot_failed(format!("HTTP server failed: {}", e))
    })
}

/// Run the demo client, printing its transcript to stdout
pub fn demo(base_url: &str) -> CliResult<()> {
    let client =
        StudentClient::new(base_url).map_err(|e| CliError::config_error(e.to_string()))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    let mut stdout = io::stdout();
    rt.block_on(run_demo(&client, &mut stdout))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = write_config(r#"{"host": "0.0.0.0", "port": 9001}"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9001");
        assert!(config.seed);
    }

    #[test]
    fn test_load_config_invalid_json() {
        let file = write_config("{not json");
        let err = load_config(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "STUDENT_CLI_CONFIG_ERROR");
        assert!(err.message().starts_with("Invalid config JSON"));
    }

    #[test]
    fn test_load_config_rejects_zero_port() {
        let file = write_config(r#"{"port": 0}"#);
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/student-api.json")).unwrap_err();
        assert!(err.message().starts_with("Failed to read config"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_config(r#"{"port": 9001, "seed": true}"#);
        let config =
            resolve_config(Some(file.path()), Some("0.0.0.0".into()), Some(9100), true).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:9100");
        assert!(!config.seed);
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(None, None, None, false).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_demo_rejects_invalid_base_url() {
        let err = demo("localhost without scheme").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert!(err.message().starts_with("Invalid base URL"));
    }
}
