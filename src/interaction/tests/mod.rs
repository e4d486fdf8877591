//! Tests for the dashboard controller.
//!
//! Tests are organized into categories:
//! - `gestures`: drag and corner resizes driven through pixel events
//! - `lifecycle`: noops, removal, grid toggling and viewport changes
//! - `resolver`: the controller's use of the injected resolver

mod gestures;

use super::{ContainerBounds, Dashboard, DashboardEvent, Effect, Handle, NoopReason, Point};
use crate::layout::{Breakpoints, GridConfig, GridRect, Widget, WidgetKind};

/// 1200px wide container at the origin: 12 columns of 100px, rows of 96px.
pub(super) const CONTAINER: ContainerBounds = ContainerBounds::new(0.0, 0.0, 1200.0);

pub(super) fn widget(id: &str, x: u32, y: u32, w: u32, h: u32) -> Widget {
    Widget::new(id, WidgetKind::Table, id, x, y, w, h)
}

/// Two widgets side by side across the full 12-column width.
pub(super) fn two_up() -> Vec<Widget> {
    vec![widget("w1", 0, 0, 8, 4), widget("w2", 8, 0, 4, 4)]
}

pub(super) fn dashboard(widgets: Vec<Widget>) -> Dashboard {
    Dashboard::new(widgets, GridConfig::default(), Breakpoints::default())
}

/// Pixel position in the middle of grid cell `(col, row)` of [`CONTAINER`].
pub(super) fn at_cell(col: i64, row: i64) -> Point {
    Point::new(col as f64 * 100.0 + 50.0, row as f64 * 96.0 + 48.0)
}

pub(super) fn down(id: &str, handle: Handle) -> DashboardEvent {
    DashboardEvent::PointerDown {
        widget_id: id.to_string(),
        handle,
        pointer: Point::default(),
    }
}

pub(super) fn move_to(col: i64, row: i64) -> DashboardEvent {
    DashboardEvent::PointerMove {
        pointer: at_cell(col, row),
        container: CONTAINER,
    }
}

pub(super) fn rect_of(widgets: &[Widget], id: &str) -> GridRect {
    widgets
        .iter()
        .find(|w| w.id == id)
        .map(Widget::rect)
        .unwrap_or_else(|| panic!("widget {} missing", id))
}

pub(super) fn noop(reason: NoopReason) -> Effect {
    Effect::Noop { reason }
}
