//! Clamping and overlap tests. Pure functions, no state.

use super::widget::{GridRect, Widget};

/// Narrowest allowed widget, in columns.
pub const MIN_WIDGET_WIDTH: u32 = 1;

/// Shortest allowed widget, in rows.
pub const MIN_WIDGET_HEIGHT: u32 = 2;

/// Returns a copy of `widget` brought inside a grid of `cols` columns.
///
/// `w` is clamped to `1..=cols`, then `x` to `0..=cols - w`, and `h` is
/// raised to at least two rows. A `cols` of zero is treated as one column.
/// Applied to every widget on every pass, so widgets left over from a wider
/// grid are pulled back in when the column count shrinks.
pub fn clamp_widget(widget: &Widget, cols: u32) -> Widget {
    let cols = cols.max(MIN_WIDGET_WIDTH);
    let mut clamped = widget.clone();
    clamped.w = widget.w.clamp(MIN_WIDGET_WIDTH, cols);
    clamped.x = widget.x.min(cols - clamped.w);
    clamped.h = widget.h.max(MIN_WIDGET_HEIGHT);
    clamped
}

/// Whether two widgets' rectangles intersect.
///
/// Strict inequalities: widgets that only share an edge do not overlap.
pub fn overlaps(a: &Widget, b: &Widget) -> bool {
    rects_overlap(&a.rect(), &b.rect())
}

/// [`overlaps`] on bare rectangles.
///
/// Edges are computed in `u64` so rectangles reaching past `u32::MAX` keep
/// their full extent.
pub fn rects_overlap(a: &GridRect, b: &GridRect) -> bool {
    let (ax, ay, bx, by) = (
        u64::from(a.x),
        u64::from(a.y),
        u64::from(b.x),
        u64::from(b.y),
    );
    ax < bx + u64::from(b.w)
        && ax + u64::from(a.w) > bx
        && ay < by + u64::from(b.h)
        && ay + u64::from(a.h) > by
}

/// Whether `widget` satisfies every geometry bound for `cols` columns.
pub fn is_within_bounds(widget: &Widget, cols: u32) -> bool {
    widget.w >= MIN_WIDGET_WIDTH && widget.h >= MIN_WIDGET_HEIGHT && widget.right() <= cols
}

/// Returns the first overlapping pair of distinct widgets, by index.
pub fn first_overlap(widgets: &[Widget]) -> Option<(usize, usize)> {
    for i in 0..widgets.len() {
        for j in (i + 1)..widgets.len() {
            if overlaps(&widgets[i], &widgets[j]) {
                return Some((i, j));
            }
        }
    }
    None
}
