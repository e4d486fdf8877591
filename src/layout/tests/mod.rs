//! Tests for the reflow engine.
//!
//! Tests are organized into categories:
//! - `scenarios`: worked drag examples on the 12-column grid
//! - `responsive`: clamp-on-read when the column count shrinks
//! - `determinism`: idempotence, purity and stable ordering


use super::{Widget, WidgetKind};

/// Helper function to create a test widget with the given geometry.
pub(super) fn widget(id: &str, x: u32, y: u32, w: u32, h: u32) -> Widget {
    Widget::new(id, WidgetKind::Chart, id, x, y, w, h)
}

/// Finds a widget by id, panicking with a readable message if missing.
pub(super) fn by_id<'a>(layout: &'a [Widget], id: &str) -> &'a Widget {
    layout
        .iter()
        .find(|w| w.id == id)
        .unwrap_or_else(|| panic!("widget {} missing from layout", id))
}
