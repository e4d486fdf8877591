pub(crate) use super::*;
pub(crate) use crate::interaction::InteractionState;
pub(crate) use crate::layout::seed::demo_layout;
pub(crate) use crate::layout::{Breakpoints, GridConfig, GridRect};
pub(crate) use crate::tui::test_utils::test_terminal;
pub(crate) use crossterm::event::KeyModifiers;


/// Demo dashboard on a 12-column grid, 8x32 px per terminal cell.
pub(crate) fn make_app() -> App {
    let dashboard = Dashboard::new(demo_layout(), GridConfig::new(12, 96), Breakpoints::default());
    App::new(dashboard, CellScale::new(8, 32), Duration::from_millis(100))
}

/// Renders `app` once into a 160x40 test terminal.
pub(crate) fn draw(app: &mut App) {
    let mut terminal = test_terminal(160, 40);
    terminal
        .draw(|f| render_dashboard(f, app))
        .expect("draw should succeed");
}

pub(crate) fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub(crate) fn rect_of(app: &App, id: &str) -> GridRect {
    app.dashboard
        .widgets()
        .iter()
        .find(|w| w.id == id)
        .unwrap_or_else(|| panic!("widget {} missing", id))
        .rect()
}
