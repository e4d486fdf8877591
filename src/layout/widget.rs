//! Widget geometry model shared by the engine and the interaction layer.
//!
//! All coordinates are grid units. Unsigned fields make `x >= 0` and
//! `y >= 0` hold by construction; the remaining bounds (`w >= 1`, `h >= 2`,
//! `x + w <= cols`) are enforced by [`clamp_widget`](super::geometry::clamp_widget).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category of a widget.
///
/// The engine never looks at it; it is carried through so the host can
/// pick a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Bar or line chart.
    Chart,
    /// Static image.
    Image,
    /// Vertical list of entries.
    List,
    /// Key/value table.
    Table,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WidgetKind::Chart => "chart",
            WidgetKind::Image => "image",
            WidgetKind::List => "list",
            WidgetKind::Table => "table",
        };
        write!(f, "{}", s)
    }
}

/// A rectangular widget placed on the dashboard grid.
///
/// Serialized with the field names of the widget feed (`type` for the kind,
/// `data` for the payload) so layout files can be exchanged with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier within one layout.
    pub id: String,
    /// Content category.
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Display title.
    pub title: String,
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
    /// Opaque content, passed through untouched.
    #[serde(rename = "data", default)]
    pub payload: serde_json::Value,
}

impl Widget {
    /// Creates a widget with an empty payload.
    pub fn new(id: &str, kind: WidgetKind, title: &str, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            x,
            y,
            w,
            h,
            payload: serde_json::Value::Null,
        }
    }

    /// Returns the widget's rectangle.
    pub fn rect(&self) -> GridRect {
        GridRect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Row just below the widget.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Column just right of the widget.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Returns a copy with the set fields of `patch` applied.
    ///
    /// The id of the patch is not checked; callers match ids first.
    pub fn patched(&self, patch: &GeometryPatch) -> Self {
        let mut updated = self.clone();
        if let Some(x) = patch.x {
            updated.x = x;
        }
        if let Some(y) = patch.y {
            updated.y = y;
        }
        if let Some(w) = patch.w {
            updated.w = w;
        }
        if let Some(h) = patch.h {
            updated.h = h;
        }
        updated
    }
}

/// Axis-aligned rectangle in grid units.
///
/// Used for the placeholder (ghost outline) of the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridRect {
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
}

impl GridRect {
    /// Creates a rectangle.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

impl fmt::Display for GridRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@({},{})", self.w, self.h, self.x, self.y)
    }
}

/// Partial geometry update for one widget.
///
/// Fields left as `None` keep the widget's current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeometryPatch {
    /// Id of the widget being moved or resized.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
}

impl GeometryPatch {
    /// Creates a patch that changes nothing.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Creates a patch that sets every field from `rect`.
    pub fn from_rect(id: impl Into<String>, rect: GridRect) -> Self {
        Self {
            id: id.into(),
            x: Some(rect.x),
            y: Some(rect.y),
            w: Some(rect.w),
            h: Some(rect.h),
        }
    }

    pub fn x(mut self, x: u32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: u32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn w(mut self, w: u32) -> Self {
        self.w = Some(w);
        self
    }

    pub fn h(mut self, h: u32) -> Self {
        self.h = Some(h);
        self
    }
}
