//! Candidate geometry for each gesture mode.
//!
//! Every function takes the active widget's geometry at gesture start and
//! the grid cell under the pointer, and returns the rectangle to feed into
//! the reflow engine. Results always satisfy the widget bounds for `cols`
//! whenever `origin` itself fits in the grid.

use super::pointer::GridCell;
use crate::layout::{GridRect, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH};

/// `v` limited to `lo..=hi`; the lower bound wins when the range is empty.
fn bound(v: i64, lo: i64, hi: i64) -> i64 {
    v.min(hi).max(lo)
}

fn to_grid(v: i64) -> u32 {
    u32::try_from(v.max(0)).unwrap_or(u32::MAX)
}

/// Height from the origin's top row down to and including `row`.
fn stretched_height(origin: &GridRect, row: i64) -> u32 {
    let h = row - i64::from(origin.y) + 1;
    to_grid(h.max(i64::from(MIN_WIDGET_HEIGHT)))
}

/// Moving: the pointer cell becomes the top-left corner.
///
/// `w = min(w, cols)`, `x = clamp(col, 0, cols - w)`, `y = max(0, row)`.
pub fn drag_candidate(origin: &GridRect, cell: GridCell, cols: u32) -> GridRect {
    let cols = i64::from(cols.max(MIN_WIDGET_WIDTH));
    let w = bound(i64::from(origin.w), i64::from(MIN_WIDGET_WIDTH), cols);
    let x = bound(cell.col, 0, cols - w);
    GridRect::new(to_grid(x), to_grid(cell.row), to_grid(w), origin.h)
}

/// Bottom-right handle: top-left corner anchored.
///
/// `w = clamp(col - x + 1, 1, cols - x)`, `h = max(2, row - y + 1)`.
pub fn resize_right_candidate(origin: &GridRect, cell: GridCell, cols: u32) -> GridRect {
    let x = i64::from(origin.x);
    let w = bound(
        cell.col - x + 1,
        i64::from(MIN_WIDGET_WIDTH),
        i64::from(cols) - x,
    );
    GridRect::new(origin.x, origin.y, to_grid(w), stretched_height(origin, cell.row))
}

/// Bottom-left handle: right edge and top row anchored.
///
/// `x = clamp(col, 0, right - 1)`, `w = right - x`, `h = max(2, row - y + 1)`.
pub fn resize_left_candidate(origin: &GridRect, cell: GridCell) -> GridRect {
    let right = i64::from(origin.x) + i64::from(origin.w);
    let x = bound(cell.col, 0, right - 1);
    let w = (right - x).max(i64::from(MIN_WIDGET_WIDTH));
    GridRect::new(
        to_grid(x),
        origin.y,
        to_grid(w),
        stretched_height(origin, cell.row),
    )
}
