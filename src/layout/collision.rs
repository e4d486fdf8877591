//! Collision resolution: push overlapping widgets straight down until the
//! layout has no overlapping pair.
//!
//! Each scan sorts the widgets by `y` (stable) and looks for the first
//! overlapping ordered pair. The winner stays put and the loser moves to the
//! winner's bottom edge, keeping its `x` and `w`. The scan then restarts.
//!
//! Winner selection:
//! 1. the moved widget always wins;
//! 2. otherwise the widget with the smaller `y` wins;
//! 3. on equal `y`, the widget earlier in the scan order wins.
//!
//! Because the pair overlaps, the loser's top is above the winner's bottom,
//! so every push strictly increases the sum of all `y` values. The loop is
//! still capped by [`step_budget`] and reports [`LayoutError`] instead of
//! spinning if that guarantee is ever broken. A push whose result would not
//! fit in `u32` rows is reported the same way.

use super::error::LayoutError;
use super::geometry::overlaps;
use super::widget::Widget;

/// Lower bound of the step budget, for tiny layouts.
const MIN_STEP_BUDGET: u64 = 64;

/// Maximum number of pushes allowed for `widgets`.
///
/// `n² · (max_y + Σh + 1)`, saturating, never below [`MIN_STEP_BUDGET`].
pub fn step_budget(widgets: &[Widget]) -> usize {
    let n = widgets.len() as u64;
    let max_y = widgets.iter().map(|w| u64::from(w.y)).max().unwrap_or(0);
    let total_h = widgets
        .iter()
        .fold(0u64, |acc, w| acc.saturating_add(u64::from(w.h)));
    let span = max_y.saturating_add(total_h).saturating_add(1);
    let budget = n.saturating_mul(n).saturating_mul(span).max(MIN_STEP_BUDGET);
    usize::try_from(budget).unwrap_or(usize::MAX)
}

/// Removes every pairwise overlap by pushing losers downward.
///
/// `moved_id` names the widget whose geometry is authoritative; it never
/// moves. With `None` the smaller-`y` rule alone decides.
pub fn resolve_collisions(
    widgets: Vec<Widget>,
    moved_id: Option<&str>,
) -> Result<Vec<Widget>, LayoutError> {
    let budget = step_budget(&widgets);
    resolve_collisions_with_budget(widgets, moved_id, budget)
}

/// [`resolve_collisions`] with an explicit cap on the number of pushes.
pub(crate) fn resolve_collisions_with_budget(
    widgets: Vec<Widget>,
    moved_id: Option<&str>,
    budget: usize,
) -> Result<Vec<Widget>, LayoutError> {
    let mut layout = widgets;
    let mut steps = 0usize;

    loop {
        layout.sort_by_key(|w| w.y);

        let Some((winner, loser)) = find_collision(&layout, moved_id) else {
            if steps > 0 {
                tracing::trace!(steps, "collisions resolved");
            }
            return Ok(layout);
        };

        if steps >= budget {
            tracing::error!(
                steps,
                widgets = layout.len(),
                winner = %layout[winner].id,
                loser = %layout[loser].id,
                "collision resolution exceeded its step budget"
            );
            return Err(LayoutError::CollisionBudgetExceeded {
                steps,
                widgets: layout.len(),
            });
        }

        // The loser must still fit below the winner without wrapping.
        let new_y = layout[winner]
            .y
            .checked_add(layout[winner].h)
            .filter(|y| y.checked_add(layout[loser].h).is_some());
        let Some(new_y) = new_y else {
            tracing::error!(
                winner = %layout[winner].id,
                loser = %layout[loser].id,
                "push would move a widget past the last row"
            );
            return Err(LayoutError::RowOverflow {
                id: layout[loser].id.clone(),
            });
        };
        debug_assert!(new_y > layout[loser].y, "push must move the loser down");
        tracing::trace!(
            winner = %layout[winner].id,
            loser = %layout[loser].id,
            from = layout[loser].y,
            to = new_y,
            "push"
        );
        layout[loser].y = new_y;
        steps += 1;
    }
}

/// Finds the first overlapping ordered pair and returns `(winner, loser)`.
fn find_collision(layout: &[Widget], moved_id: Option<&str>) -> Option<(usize, usize)> {
    for i in 0..layout.len() {
        for j in 0..layout.len() {
            if i == j {
                continue;
            }
            if overlaps(&layout[i], &layout[j]) {
                return Some(pick_winner(layout, i, j, moved_id));
            }
        }
    }
    None
}

fn pick_winner(layout: &[Widget], a: usize, b: usize, moved_id: Option<&str>) -> (usize, usize) {
    let is_moved = |idx: usize| moved_id.is_some_and(|id| layout[idx].id == id);
    if is_moved(a) {
        (a, b)
    } else if is_moved(b) {
        (b, a)
    } else if layout[b].y < layout[a].y {
        (b, a)
    } else {
        (a, b)
    }
}
