//! Replaying scripted dashboard events.
//!
//! A script is JSON Lines: one [`DashboardEvent`] per line. Blank lines and
//! lines starting with `#` are skipped, so scripts can be annotated.
//!
//! ```text
//! # drag w1 three columns right
//! {"event":"pointer_down","widget_id":"w1","handle":"drag","pointer":{"x":0,"y":0}}
//! {"event":"pointer_move","pointer":{"x":350,"y":10},"container":{"left":0,"top":0,"width":1200}}
//! {"event":"pointer_up"}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::interaction::{Dashboard, DashboardEvent, Effect};
use crate::layout::{LayoutError, LayoutResolver, Widget};

/// Errors that can occur while loading or running an event script.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Failed to read the script from disk.
    #[error("Failed to read event script: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is not a valid event.
    #[error("Invalid event on line {line}: {message}")]
    ParseError {
        /// One-based line number in the script.
        line: usize,
        message: String,
    },

    /// The engine failed while handling an event.
    #[error("Event on line {line} could not be applied")]
    LayoutFailed {
        line: usize,
        #[source]
        source: LayoutError,
    },
}

/// One event together with the script line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedEvent {
    pub line: usize,
    pub event: DashboardEvent,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Widget list after the last event.
    pub widgets: Vec<Widget>,
    /// Column count after the last event.
    pub cols: u32,
    /// One effect per event, in script order.
    pub effects: Vec<Effect>,
}

/// Parses a JSON Lines event script.
pub fn parse_events(content: &str) -> Result<Vec<ScriptedEvent>, ReplayError> {
    let mut events = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|e| ReplayError::ParseError {
            line: idx + 1,
            message: e.to_string(),
        })?;
        events.push(ScriptedEvent {
            line: idx + 1,
            event,
        });
    }
    Ok(events)
}

/// Reads and parses an event script from disk.
pub fn load_events(path: &Path) -> Result<Vec<ScriptedEvent>, ReplayError> {
    let content = fs::read_to_string(path).map_err(|e| ReplayError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let events = parse_events(&content)?;
    tracing::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Feeds `events` into `dashboard` in order and reports the result.
///
/// Stops at the first event the engine fails on.
pub fn replay<R: LayoutResolver>(
    dashboard: &mut Dashboard<R>,
    events: Vec<ScriptedEvent>,
) -> Result<ReplayReport, ReplayError> {
    let mut effects = Vec::with_capacity(events.len());
    for ScriptedEvent { line, event } in events {
        let effect = dashboard
            .handle(event)
            .map_err(|source| ReplayError::LayoutFailed { line, source })?;
        effects.push(effect);
    }
    Ok(ReplayReport {
        widgets: dashboard.widgets().to_vec(),
        cols: dashboard.cols(),
        effects,
    })
}
