//! Gesture state for the single active interaction.
//!
//! ```text
//! Idle --pointer_down--> Active(mode, widget) --pointer_up--> Idle
//! ```
//!
//! A mode only exists inside [`InteractionState::Active`], so "mode set but
//! no active widget" cannot be represented.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pointer::Point;
use crate::layout::GridRect;

/// Which part of a widget the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handle {
    /// Title bar: moves the widget.
    Drag,
    /// Bottom-left corner: resizes with the right edge anchored.
    ResizeLeft,
    /// Bottom-right corner: resizes with the top-left corner anchored.
    ResizeRight,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Handle::Drag => "drag",
            Handle::ResizeLeft => "resize-left",
            Handle::ResizeRight => "resize-right",
        };
        write!(f, "{}", s)
    }
}

/// The gesture in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveGesture {
    /// Widget being manipulated.
    pub widget_id: String,
    /// Grabbed handle.
    pub mode: Handle,
    /// Widget geometry when the gesture started.
    pub origin: GridRect,
    /// Last candidate sent to the resolver, for jitter suppression.
    pub last_candidate: GridRect,
    /// Ghost outline: the widget's geometry in the latest resolved layout.
    pub placeholder: GridRect,
    /// Latest raw pointer position, for a floating drag preview.
    pub pointer: Point,
}

/// Ephemeral per-gesture state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    Idle,
    Active(ActiveGesture),
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        matches!(self, InteractionState::Active(_))
    }

    pub fn gesture(&self) -> Option<&ActiveGesture> {
        match self {
            InteractionState::Active(g) => Some(g),
            InteractionState::Idle => None,
        }
    }

    pub fn active_widget_id(&self) -> Option<&str> {
        self.gesture().map(|g| g.widget_id.as_str())
    }

    pub fn mode(&self) -> Option<Handle> {
        self.gesture().map(|g| g.mode)
    }

    /// Ghost outline to draw, if a gesture is in progress.
    pub fn placeholder(&self) -> Option<GridRect> {
        self.gesture().map(|g| g.placeholder)
    }
}

/// Why an event was accepted but changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    /// Pointer move or up without a gesture in progress.
    IdleWithoutGesture,
    /// Pointer down while another gesture is active.
    GestureAlreadyActive,
    /// The event names a widget that is not on the dashboard.
    UnknownWidget,
    /// The widget under manipulation was removed mid-gesture.
    ActiveWidgetMissing,
    /// The container cannot be divided into grid cells.
    DegenerateContainer,
    /// The pointer moved within the cell of the previous candidate.
    SubCellJitter,
    /// A viewport resize that kept the same column count.
    ColumnsUnchanged,
}

impl fmt::Display for NoopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoopReason::IdleWithoutGesture => "no gesture in progress",
            NoopReason::GestureAlreadyActive => "a gesture is already active",
            NoopReason::UnknownWidget => "unknown widget",
            NoopReason::ActiveWidgetMissing => "active widget was removed",
            NoopReason::DegenerateContainer => "container has no usable size",
            NoopReason::SubCellJitter => "pointer stayed in the same cell",
            NoopReason::ColumnsUnchanged => "column count unchanged",
        };
        write!(f, "{}", s)
    }
}
