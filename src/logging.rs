//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DGRID_LOG` environment variable, falling back to `logging.log_level`
//! from the config file.
//!
//! # Usage
//!
//! ```bash
//! # Debug level
//! DGRID_LOG=debug dgrid resolve
//!
//! # Trace every push and lift of the reflow engine
//! DGRID_LOG=dashboard_grid::layout=trace,warn dgrid replay --events drag.jsonl
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::error::ConfigError;
use crate::config::schema::{LogLevel, LoggingConfig};
use crate::config::xdg;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "DGRID_LOG";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Nowhere: the terminal UI owns stderr and no file is configured.
    Disabled,
}

impl LogTarget {
    /// Picks the target for `config`; `interactive` hosts never log to stderr.
    pub fn select(config: &LoggingConfig, interactive: bool) -> Self {
        if !config.log_file.is_empty() {
            LogTarget::File(xdg::expand_tilde(&config.log_file))
        } else if interactive {
            LogTarget::Disabled
        } else {
            LogTarget::Stderr
        }
    }
}

/// Filter from `DGRID_LOG`, or `level` when the variable is unset or invalid.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init(config: &LoggingConfig, interactive: bool) -> Result<(), ConfigError> {
    let filter = build_filter(config.log_level);
    let installed = match LogTarget::select(config, interactive) {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                xdg::ensure_dir(parent).map_err(|e| ConfigError::WriteError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| ConfigError::WriteError {
                    path: path.clone(),
                    source: e,
                })?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
