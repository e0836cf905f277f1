//! Command-line interface parsing for Monkeydex
//!
//! This module handles parsing of CLI arguments using clap and turns them
//! into a validated `StartupConfig`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::cache::DEFAULT_EXPIRY_MINUTES;
use crate::data::http::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The cache window must be at least one minute
    #[error("Invalid cache window: {0} minutes. Must be greater than zero")]
    InvalidCacheMinutes(i64),

    /// The request timeout must be at least one second
    #[error("Invalid timeout: {0} seconds. Must be greater than zero")]
    InvalidTimeout(u64),

    /// The endpoint is not an http(s) URL
    #[error("Invalid endpoint: '{0}'. Expected an http:// or https:// URL")]
    InvalidEndpoint(String),
}

/// Monkeydex - Browse the monkey catalog from your terminal
#[derive(Parser, Debug)]
#[command(name = "monkeydex")]
#[command(about = "Browse the monkey catalog with search, random picks and statistics")]
#[command(version)]
pub struct Cli {
    /// Use the built-in catalog instead of the remote source
    #[arg(long)]
    pub offline: bool,

    /// URL of the remote catalog (a JSON array of records)
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Minutes the fetched catalog stays cached
    #[arg(long, value_name = "MINUTES", default_value_t = DEFAULT_EXPIRY_MINUTES)]
    pub cache_minutes: i64,

    /// Request timeout for the remote source in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Directory for the log file (defaults to the platform cache directory)
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Built-in catalog with simulated latency
    Offline,
    /// Remote JSON endpoint
    Remote { endpoint: String, timeout: Duration },
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub source: Source,
    /// Cache validity window
    pub cache_expiry: chrono::Duration,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            source: Source::Remote {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout: DEFAULT_TIMEOUT,
            },
            cache_expiry: chrono::Duration::minutes(DEFAULT_EXPIRY_MINUTES),
            log_dir: None,
            verbose: false,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if a value is out of range
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.cache_minutes <= 0 {
            return Err(CliError::InvalidCacheMinutes(cli.cache_minutes));
        }

        let source = if cli.offline {
            Source::Offline
        } else {
            if cli.timeout_secs == 0 {
                return Err(CliError::InvalidTimeout(cli.timeout_secs));
            }
            if !(cli.endpoint.starts_with("http://") || cli.endpoint.starts_with("https://")) {
                return Err(CliError::InvalidEndpoint(cli.endpoint.clone()));
            }
            Source::Remote {
                endpoint: cli.endpoint.clone(),
                timeout: Duration::from_secs(cli.timeout_secs),
            }
        };

        Ok(StartupConfig {
            source,
            cache_expiry: chrono::Duration::minutes(cli.cache_minutes),
            log_dir: cli.log_dir.clone(),
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["monkeydex"]);
        assert!(!cli.offline);
        assert!(!cli.verbose);
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.cache_minutes, 30);
    }

    #[test]
    fn test_startup_config_default_matches_no_args() {
        let cli = Cli::parse_from(["monkeydex"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config, StartupConfig::default());
    }

    #[test]
    fn test_startup_config_offline() {
        let cli = Cli::parse_from(["monkeydex", "--offline"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.source, Source::Offline);
    }

    #[test]
    fn test_startup_config_custom_values() {
        let cli = Cli::parse_from([
            "monkeydex",
            "--endpoint",
            "http://localhost:3000/monkeys",
            "--cache-minutes",
            "5",
            "--timeout-secs",
            "3",
            "--log-dir",
            "/tmp/monkeydex",
            "-v",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(
            config.source,
            Source::Remote {
                endpoint: "http://localhost:3000/monkeys".to_string(),
                timeout: Duration::from_secs(3),
            }
        );
        assert_eq!(config.cache_expiry, chrono::Duration::minutes(5));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/monkeydex")));
        assert!(config.verbose);
    }

    #[test]
    fn test_zero_cache_minutes_is_rejected() {
        let cli = Cli::parse_from(["monkeydex", "--cache-minutes", "0"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("Invalid cache window"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let cli = Cli::parse_from(["monkeydex", "--timeout-secs", "0"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::InvalidTimeout(0))
        ));
    }

    #[test]
    fn test_timeout_is_ignored_offline() {
        let cli = Cli::parse_from(["monkeydex", "--offline", "--timeout-secs", "0"]);
        assert!(StartupConfig::from_cli(&cli).is_ok());
    }

    #[test]
    fn test_non_http_endpoint_is_rejected() {
        let cli = Cli::parse_from(["monkeydex", "--endpoint", "ftp://example.com/monkeys"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("ftp://example.com/monkeys"));
    }
}
