//! Grid parameters and responsive column breakpoints.

use serde::{Deserialize, Serialize};

/// Default height of one grid row, in pixels.
pub const DEFAULT_ROW_HEIGHT_PX: u32 = 96;

/// Viewport widths (pixels) at which the column count changes.
///
/// A viewport narrower than `narrow_below` gets `narrow_cols`, narrower than
/// `medium_below` gets `medium_cols`, anything wider gets `wide_cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Upper bound (exclusive) of the narrow range.
    pub narrow_below: u32,
    /// Columns in the narrow range.
    pub narrow_cols: u32,
    /// Upper bound (exclusive) of the medium range.
    pub medium_below: u32,
    /// Columns in the medium range.
    pub medium_cols: u32,
    /// Columns at or above `medium_below`.
    pub wide_cols: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow_below: 640,
            narrow_cols: 2,
            medium_below: 1024,
            medium_cols: 6,
            wide_cols: 12,
        }
    }
}

impl Breakpoints {
    /// Column count for a viewport `width` pixels wide.
    pub fn cols_for_width(&self, width: f64) -> u32 {
        if width < f64::from(self.narrow_below) {
            self.narrow_cols
        } else if width < f64::from(self.medium_below) {
            self.medium_cols
        } else {
            self.wide_cols
        }
    }
}

/// Static grid parameters for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    pub cols: u32,
    /// Height of one row in pixels.
    pub row_height_px: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: Breakpoints::default().wide_cols,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
        }
    }
}

impl GridConfig {
    /// Creates a grid with an explicit column count.
    pub fn new(cols: u32, row_height_px: u32) -> Self {
        Self {
            cols,
            row_height_px,
        }
    }

    /// Derives the grid for a viewport width from `breakpoints`.
    pub fn for_viewport(width: f64, breakpoints: &Breakpoints, row_height_px: u32) -> Self {
        Self::new(breakpoints.cols_for_width(width), row_height_px)
    }
}
