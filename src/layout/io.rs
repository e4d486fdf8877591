//! Reading and writing widget lists as JSON.
//!
//! A layout file is a JSON array of widgets in the feed format
//! (`id`, `type`, `title`, `x`, `y`, `w`, `h`, `data`).

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::widget::Widget;

/// Errors that can occur when loading a layout file.
#[derive(Error, Debug)]
pub enum LayoutFileError {
    /// Failed to read the layout file from disk.
    #[error("Failed to read layout file: {path}")]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON content could not be parsed into widgets.
    #[error("Invalid layout at {path}:{line}:{column}: {message}")]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line of the error.
        line: usize,
        /// One-based column of the error.
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// Two widgets share an id.
    #[error("Duplicate widget id '{id}' in {path}")]
    DuplicateId {
        /// Path to the offending file.
        path: PathBuf,
        /// The repeated id.
        id: String,
    },

    /// Failed to serialize or write a layout.
    #[error("Failed to write layout: {message}")]
    WriteError {
        /// Description of the failure.
        message: String,
    },
}

/// Loads a widget list from a JSON file.
pub fn load_layout(path: &Path) -> Result<Vec<Widget>, LayoutFileError> {
    let content = fs::read_to_string(path).map_err(|e| LayoutFileError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_layout(&content, path)
}

/// Parses a widget list, rejecting duplicate ids.
///
/// `path` is only used for error messages.
pub fn parse_layout(content: &str, path: &Path) -> Result<Vec<Widget>, LayoutFileError> {
    let widgets: Vec<Widget> =
        serde_json::from_str(content).map_err(|e| LayoutFileError::ParseError {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

    let mut seen = HashSet::new();
    for widget in &widgets {
        if !seen.insert(widget.id.as_str()) {
            return Err(LayoutFileError::DuplicateId {
                path: path.to_path_buf(),
                id: widget.id.clone(),
            });
        }
    }

    tracing::debug!("Loaded {} widgets from {}", widgets.len(), path.display());
    Ok(widgets)
}

/// Writes `widgets` as pretty-printed JSON followed by a newline.
pub fn write_layout<W: Write>(mut writer: W, widgets: &[Widget]) -> Result<(), LayoutFileError> {
    serde_json::to_writer_pretty(&mut writer, widgets).map_err(|e| {
        LayoutFileError::WriteError {
            message: e.to_string(),
        }
    })?;
    writeln!(writer).map_err(|e| LayoutFileError::WriteError {
        message: e.to_string(),
    })
}
