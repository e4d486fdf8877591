//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path (or an explicit path).

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# dashboard-grid configuration
#
# This file was generated with the built-in defaults.
# Location: $XDG_CONFIG_HOME/dashboard-grid/config.toml

# ==============================================================================
# Grid
# ==============================================================================

[grid]

# Height of one grid row, in pixels.
row_height_px = 96

# Column count by viewport width (pixels):
#   width <  narrow_below  -> narrow_cols
#   width <  medium_below  -> medium_cols
#   otherwise              -> wide_cols
# narrow_below must be smaller than medium_below.
[grid.breakpoints]
narrow_below = 640
narrow_cols = 2
medium_below = 1024
medium_cols = 6
wide_cols = 12

# ==============================================================================
# Terminal UI
# ==============================================================================

[tui]

# Pixels represented by one terminal cell. The viewport width in pixels is
# terminal columns * cell_width_px, so these decide which breakpoint applies
# and how many terminal rows one grid row takes (row_height_px / cell_height_px).
cell_width_px = 8
cell_height_px = 32

# Draw grid guides at startup. Toggle at runtime with "g".
show_grid = true

# Redraw interval as a human-readable duration.
# Examples: "50ms", "100ms", "1s"
tick_rate = "100ms"

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Options: "error", "warn", "info", "debug", "trace"
# The DGRID_LOG environment variable overrides this (EnvFilter syntax).
log_level = "info"

# Path to log file. Empty string means stderr.
# The terminal UI only logs when a file is set.
# Tilde (~) is expanded to the user's home directory.
log_file = ""
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Writes the default config to the XDG location. See [`create_default_config_at`].
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    create_default_config_at(&path, force)?;
    Ok(path)
}

/// Creates (or force-overwrites) a default config file at `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |e: std::io::Error| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
