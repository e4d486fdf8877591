//! Pixel-space pointer positions and their translation to grid cells.

use serde::{Deserialize, Serialize};

/// Pointer position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding box of the grid container, queried per pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerBounds {
    /// Left edge in pixels.
    pub left: f64,
    /// Top edge in pixels.
    pub top: f64,
    /// Width in pixels; divided evenly between the columns.
    pub width: f64,
}

impl ContainerBounds {
    pub const fn new(left: f64, top: f64, width: f64) -> Self {
        Self { left, top, width }
    }
}

/// Grid cell under the pointer.
///
/// Signed: a pointer dragged past the left or top edge of the container
/// yields negative coordinates, which the candidate math clamps away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub col: i64,
    pub row: i64,
}

impl GridCell {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

/// Converts a pointer position to the grid cell it falls in.
///
/// `col = floor((x - left) / (width / cols))`,
/// `row = floor((y - top) / row_height_px)`.
///
/// Returns `None` when the container cannot be divided into cells: zero
/// columns, non-positive width or row height, or non-finite coordinates.
pub fn pointer_to_cell(
    point: Point,
    bounds: &ContainerBounds,
    cols: u32,
    row_height_px: u32,
) -> Option<GridCell> {
    if cols == 0 || row_height_px == 0 {
        return None;
    }
    let finite = [point.x, point.y, bounds.left, bounds.top, bounds.width]
        .iter()
        .all(|v| v.is_finite());
    if !finite || bounds.width <= 0.0 {
        return None;
    }

    let cell_width = bounds.width / f64::from(cols);
    let col = ((point.x - bounds.left) / cell_width).floor();
    let row = ((point.y - bounds.top) / f64::from(row_height_px)).floor();
    // Float-to-int casts saturate, so far-away pointers stay representable.
    Some(GridCell::new(col as i64, row as i64))
}
