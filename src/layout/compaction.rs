//! Gravity-style vertical compaction.
//!
//! Widgets are processed in `(y, x)` order; each one is lifted to the
//! smallest row where it overlaps none of the widgets already placed.
//! Single pass, greedy: a widget is never re-checked against widgets placed
//! after it.

use super::geometry::rects_overlap;
use super::widget::{GridRect, Widget};

/// Pulls every widget of a collision-free layout as far up as it can go.
///
/// The result is ordered by final `(y, x)`, which makes a second run over the
/// output reproduce it exactly.
pub fn compact(widgets: Vec<Widget>) -> Vec<Widget> {
    let mut order = widgets;
    order.sort_by_key(|w| (w.y, w.x));

    let mut placed: Vec<Widget> = Vec::with_capacity(order.len());
    for widget in order {
        let y = lowest_free_row(&placed, &widget);
        if y != widget.y {
            tracing::trace!(id = %widget.id, from = widget.y, to = y, "lift");
        }
        placed.push(Widget { y, ..widget });
    }

    placed.sort_by_key(|w| (w.y, w.x));
    placed
}

/// Smallest row in `0..=widget.y` where `widget` overlaps nothing in `placed`.
///
/// Scanning every row from zero is equivalent to testing only row zero and
/// the bottom edges of placed widgets: a free row directly under a blocked
/// row always sits on some placed widget's bottom edge.
fn lowest_free_row(placed: &[Widget], widget: &Widget) -> u32 {
    let mut candidates: Vec<u32> = std::iter::once(0)
        .chain(placed.iter().map(Widget::bottom))
        .filter(|&y| y < widget.y)
        .collect();
    candidates.sort_unstable();
    candidates.dedup();

    let rect = widget.rect();
    candidates
        .into_iter()
        .find(|&y| {
            let lifted = GridRect { y, ..rect };
            !placed.iter().any(|other| rects_overlap(&lifted, &other.rect()))
        })
        .unwrap_or(widget.y)
}
