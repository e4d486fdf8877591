//! Dashboard Grid library
//!
//! A reflow engine for dashboards made of rectangular widgets on a fixed
//! column grid, plus the interaction controller that turns pointer gestures
//! (drag, resize from either bottom corner) into engine calls.
//!
//! The engine ([`layout`]) is pure and synchronous. The controller
//! ([`interaction`]) is a small state machine with an explicit event and
//! effect vocabulary, so any host can drive it: the bundled terminal UI
//! ([`tui`]), a recorded event script ([`replay`]), or a test.

/// Configuration file loading, defaults and XDG path resolution.
pub mod config;

/// Gesture state machine and the `Dashboard` controller.
pub mod interaction;

/// Reflow engine: clamping, collision push-down and gravity compaction.
pub mod layout;

/// Tracing subscriber setup.
pub mod logging;

/// Replaying JSON Lines event scripts through a dashboard.
pub mod replay;

/// Terminal user interface hosting a dashboard.
pub mod tui;

pub use interaction::{Dashboard, DashboardEvent, Effect};
pub use layout::{resolve_layout, GeometryPatch, GridConfig, GridRect, LayoutError, Widget};
