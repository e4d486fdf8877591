//! Interactive terminal host for the dashboard.
//!
//! A thin adapter over [`Dashboard`](crate::interaction::Dashboard) built on
//! ratatui and crossterm: mouse input becomes pointer events, the terminal
//! width becomes the viewport width, and each render draws the current
//! widget list and the gesture's ghost outline.

pub mod app;
pub mod event;
pub mod scale;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
