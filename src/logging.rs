//! Log setup
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr. Without `RUST_LOG` the verbosity flag picks the crate's level. A
//! `RUST_LOG` value is used as given, and `-v` only adds a debug directive
//! when that value says nothing about this crate.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Target prefix of every event this crate emits
const CRATE_TARGET: &str = "monkeydex";

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "monkeydex.log";

/// Returns the platform cache directory for Monkeydex, if one can be determined
///
/// Uses `~/.cache/monkeydex/` on Linux, or the equivalent on other platforms.
pub fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "monkeydex").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Creates `dir` if needed and opens the log file inside it for appending
pub fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}

/// Filter directive for the crate's own events
pub fn crate_directive(verbose: bool) -> &'static str {
    if verbose {
        "monkeydex=debug"
    } else {
        "monkeydex=info"
    }
}

/// Whether a `RUST_LOG` value has a directive aimed at this crate
fn targets_crate(rust_log: &str) -> bool {
    rust_log.split(',').any(|directive| {
        let directive = directive.trim();
        directive == CRATE_TARGET
            || directive
                .strip_prefix(CRATE_TARGET)
                .map_or(false, |rest| rest.starts_with(['=', ':', '[']))
    })
}

/// Builds the event filter from a `RUST_LOG` value and the verbosity flag
pub fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let builder = EnvFilter::builder();
    match rust_log.map(str::trim).filter(|value| !value.is_empty()) {
        None => builder.parse_lossy(crate_directive(verbose)),
        Some(value) if verbose && !targets_crate(value) => {
            builder.parse_lossy(format!("{},{}", value, crate_directive(true)))
        }
        Some(value) => builder.parse_lossy(value),
    }
}

/// Initialize file logging
///
/// Returns the path of the log file, or `None` when no directory is
/// available and logging stays disabled.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> io::Result<Option<PathBuf>> {
    let dir = match log_dir.map(Path::to_path_buf).or_else(default_log_dir) {
        Some(dir) => dir,
        None => return Ok(None),
    };

    let file = open_log_file(&dir)?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(Some(dir.join(LOG_FILE_NAME)))
}
