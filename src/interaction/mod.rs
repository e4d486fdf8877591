//! Gesture handling between the host and the reflow engine.
//!
//! The host reports pointer, viewport and command events as
//! [`DashboardEvent`]s; the controller turns pointer pixels into grid
//! cells, computes a candidate rectangle for the active widget and asks a
//! [`LayoutResolver`](crate::layout::LayoutResolver) for the new layout.

pub mod candidate;
pub mod controller;
pub mod pointer;
pub mod state;

pub use controller::{reduce, Dashboard, DashboardEvent, DashboardState, Effect};
pub use pointer::{pointer_to_cell, ContainerBounds, GridCell, Point};
pub use state::{ActiveGesture, Handle, InteractionState, NoopReason};

#[cfg(test)]
mod tests;
