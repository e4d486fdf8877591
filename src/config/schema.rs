//! TOML configuration schema types for dashboard-grid.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial (or empty) file is always valid TOML
//! for this schema. Range checks happen in [`Config::validate`].
//!
//! Duration fields use human-readable strings (e.g. `"100ms"`) parsed by
//! the `humantime` crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::layout::grid::DEFAULT_ROW_HEIGHT_PX;
use crate::layout::{Breakpoints, GridConfig};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [grid]
/// [grid.breakpoints]
/// [tui]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid geometry.
    pub grid: GridSection,
    /// Terminal host settings.
    pub tui: TuiConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl Config {
    /// Checks value ranges that TOML types alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("grid.row_height_px", self.grid.row_height_px)?;

        let bp = &self.grid.breakpoints;
        positive("grid.breakpoints.narrow_cols", bp.narrow_cols)?;
        positive("grid.breakpoints.medium_cols", bp.medium_cols)?;
        positive("grid.breakpoints.wide_cols", bp.wide_cols)?;
        if bp.narrow_below >= bp.medium_below {
            return Err(ConfigError::InvalidValue {
                field: "grid.breakpoints.medium_below",
                message: format!(
                    "must be greater than narrow_below ({} >= {})",
                    bp.narrow_below, bp.medium_below
                ),
            });
        }

        positive("tui.cell_width_px", self.tui.cell_width_px)?;
        positive("tui.cell_height_px", self.tui.cell_height_px)?;
        self.tui.tick_rate()?;
        Ok(())
    }

    /// Grid for a viewport `width` pixels wide.
    pub fn grid_for_viewport(&self, width: f64) -> GridConfig {
        GridConfig::for_viewport(width, &self.grid.breakpoints, self.grid.row_height_px)
    }
}

fn positive(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// The `[grid]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GridSection {
    /// Height of one grid row in pixels.
    pub row_height_px: u32,
    /// Viewport widths at which the column count changes.
    pub breakpoints: Breakpoints,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            breakpoints: Breakpoints::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// Terminal host configuration.
///
/// A terminal cell stands for `cell_width_px` × `cell_height_px` pixels so
/// pixel breakpoints and the pixel row height apply unchanged.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Pixels per terminal column.
    pub cell_width_px: u32,
    /// Pixels per terminal row.
    pub cell_height_px: u32,
    /// Whether grid guides are drawn at startup.
    pub show_grid: bool,
    /// Render tick rate as a human-readable duration (e.g. `"100ms"`).
    pub tick_rate: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            cell_width_px: 8,
            cell_height_px: 32,
            show_grid: true,
            tick_rate: "100ms".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parses `tick_rate`; zero is rejected.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        let rate = humantime::parse_duration(&self.tick_rate).map_err(|e| {
            ConfigError::InvalidValue {
                field: "tui.tick_rate",
                message: e.to_string(),
            }
        })?;
        if rate.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "tui.tick_rate",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(rate)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// The `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging verbosity, overridden by `DGRID_LOG`.
    pub log_level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub log_file: String,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Directive string for `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
