//! Reflow engine for dashboard widgets on a fixed-column grid.
//!
//! [`resolve_layout`] is the single entry point: it clamps every widget into
//! the grid, removes overlaps by pushing widgets down (the manipulated widget
//! always wins), then compacts the layout upward. Everything here is pure and
//! synchronous; the interaction layer calls it through [`LayoutResolver`].

pub mod collision;
pub mod compaction;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod io;
pub mod seed;
pub mod widget;

pub use engine::{resolve_layout, GravityLayout, LayoutResolver};
pub use error::LayoutError;
pub use geometry::{clamp_widget, overlaps, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH};
pub use grid::{Breakpoints, GridConfig};
pub use widget::{GeometryPatch, GridRect, Widget, WidgetKind};

#[cfg(test)]
mod tests;
