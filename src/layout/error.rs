//! Layout engine error types.

use thiserror::Error;

/// Errors raised by the reflow engine.
///
/// Invalid geometry is never an error (it is clamped). Failures come from
/// collision resolution: a broken progress guarantee, or a push that would
/// move a widget past the last representable row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Collision resolution did not settle within its step budget.
    ///
    /// Every push strictly increases the sum of widget rows, so hitting the
    /// budget means the winner selection or the progress guarantee is broken.
    #[error("collision resolution exceeded its budget of {steps} steps for {widgets} widgets")]
    CollisionBudgetExceeded {
        /// Steps performed before giving up.
        steps: usize,
        /// Widgets in the layout being resolved.
        widgets: usize,
    },

    /// Pushing widget `id` down would move its bottom edge past `u32::MAX`.
    #[error("widget {id} would be pushed past the last grid row")]
    RowOverflow {
        /// Widget that could not be placed.
        id: String,
    },
}
