//! Mapping between terminal cells and the dashboard's pixel space.
//!
//! Every terminal cell stands for `cell_width_px` × `cell_height_px` pixels,
//! so the same breakpoints and row height apply as in a browser host.

use ratatui::layout::Rect;

use crate::interaction::{ContainerBounds, Point};
use crate::layout::{GridConfig, GridRect};

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_width_px: u32,
    pub cell_height_px: u32,
}

impl CellScale {
    pub fn new(cell_width_px: u32, cell_height_px: u32) -> Self {
        Self {
            cell_width_px: cell_width_px.max(1),
            cell_height_px: cell_height_px.max(1),
        }
    }

    /// Pointer position at the centre of terminal cell `(column, row)`.
    pub fn to_point(&self, column: u16, row: u16) -> Point {
        Point::new(
            (f64::from(column) + 0.5) * f64::from(self.cell_width_px),
            (f64::from(row) + 0.5) * f64::from(self.cell_height_px),
        )
    }

    /// Pixel bounds of a terminal area.
    pub fn container(&self, area: Rect) -> ContainerBounds {
        ContainerBounds::new(
            f64::from(area.x) * f64::from(self.cell_width_px),
            f64::from(area.y) * f64::from(self.cell_height_px),
            f64::from(area.width) * f64::from(self.cell_width_px),
        )
    }

    /// Viewport width in pixels for a terminal `columns` wide.
    pub fn viewport_width(&self, columns: u16) -> f64 {
        f64::from(columns) * f64::from(self.cell_width_px)
    }

    /// Terminal rows covered by `rows` grid rows, rounded down.
    fn rows_to_cells(&self, rows: u32, grid: GridConfig) -> u64 {
        u64::from(rows) * u64::from(grid.row_height_px) / u64::from(self.cell_height_px)
    }

    /// Terminal area of a grid rectangle inside `area`, clipped to it.
    ///
    /// Returns `None` when nothing of the rectangle is visible.
    pub fn grid_rect_to_area(&self, rect: GridRect, grid: GridConfig, area: Rect) -> Option<Rect> {
        let cols = u64::from(grid.cols.max(1));
        let width = u64::from(area.width);
        let left = u64::from(rect.x) * width / cols;
        let right = (u64::from(rect.x.saturating_add(rect.w)) * width / cols).min(width);
        let top = self.rows_to_cells(rect.y, grid);
        let bottom = self
            .rows_to_cells(rect.y.saturating_add(rect.h), grid)
            .min(u64::from(area.height));
        if right <= left || bottom <= top {
            return None;
        }

        // All four values are bounded by the u16 area size here.
        Some(Rect::new(
            area.x + left as u16,
            area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}
