//! The reflow entry point: clamp, resolve collisions, compact.

use super::collision::resolve_collisions;
use super::compaction::compact;
use super::error::LayoutError;
use super::geometry::clamp_widget;
use super::widget::{GeometryPatch, Widget};

/// Recomputes a full, collision-free and compacted layout.
///
/// `patch` carries the new geometry of the widget under manipulation; it is
/// merged into the matching widget, which then wins every collision. With
/// `None`, or a patch whose id matches nothing, the layout is only
/// normalized.
///
/// Pure: `widgets` is not modified and identical inputs give an identical
/// output list. The output is ordered by final `(y, x)`.
pub fn resolve_layout(
    patch: Option<&GeometryPatch>,
    widgets: &[Widget],
    cols: u32,
) -> Result<Vec<Widget>, LayoutError> {
    let merged: Vec<Widget> = widgets
        .iter()
        .map(|widget| match patch {
            Some(p) if p.id == widget.id => clamp_widget(&widget.patched(p), cols),
            _ => clamp_widget(widget, cols),
        })
        .collect();

    let moved_id = patch
        .map(|p| p.id.as_str())
        .filter(|id| widgets.iter().any(|w| w.id == *id));

    let resolved = resolve_collisions(merged, moved_id)?;
    Ok(compact(resolved))
}

/// Strategy seam between gesture handling and the reflow algorithm.
///
/// The interaction controller only talks to this trait, so the algorithm is
/// implemented once and hosts (or tests) can swap it.
pub trait LayoutResolver {
    /// Returns the new widget list for `widgets` with `patch` applied.
    fn resolve(
        &self,
        patch: Option<&GeometryPatch>,
        widgets: &[Widget],
        cols: u32,
    ) -> Result<Vec<Widget>, LayoutError>;
}

/// Default resolver: [`resolve_layout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GravityLayout;

impl LayoutResolver for GravityLayout {
    fn resolve(
        &self,
        patch: Option<&GeometryPatch>,
        widgets: &[Widget],
        cols: u32,
    ) -> Result<Vec<Widget>, LayoutError> {
        resolve_layout(patch, widgets, cols)
    }
}

impl<R: LayoutResolver + ?Sized> LayoutResolver for &R {
    fn resolve(
        &self,
        patch: Option<&GeometryPatch>,
        widgets: &[Widget],
        cols: u32,
    ) -> Result<Vec<Widget>, LayoutError> {
        (**self).resolve(patch, widgets, cols)
    }
}
