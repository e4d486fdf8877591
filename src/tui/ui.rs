//! Rendering for the TUI dashboard.
//!
//! Composes the header, the widget grid and the footer. The grid pass also
//! records where each widget landed so mouse input can be hit-tested against
//! exactly what is on screen.

use crate::layout::Widget;
use crate::tui::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "Dashboard Grid";

/// Footer text showing available keybindings.
const FOOTER_TEXT: &str =
    "[drag title] Move  [drag corner] Resize  [g] Grid  [x] Remove  [r] Reset  [q] Quit";

/// Symbol used for column guides.
const GUIDE_SYMBOL: &str = "┊";

/// Renders the full dashboard: header, grid, footer.
///
/// Updates `app.grid_area` and `app.widget_areas` for mouse hit-testing.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // grid
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    frame.render_widget(Paragraph::new(header_line(app, chunks[0].width)), chunks[0]);
    render_grid(frame, app, chunks[1]);
    frame.render_widget(Paragraph::new(footer_line(app)), chunks[2]);
}

/// Title on the left, column count and gesture on the right.
fn header_line(app: &App, width: u16) -> Line<'static> {
    let mut status = format!("{} cols", app.dashboard.cols());
    if let (Some(id), Some(mode)) = (app.dashboard.active_widget_id(), app.dashboard.mode()) {
        status = format!("{} · {} {}", status, mode, id);
    }

    let used = HEADER_TEXT.chars().count() + status.chars().count();
    let padding = usize::from(width).saturating_sub(used);
    Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding)),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ])
}

fn footer_line(app: &App) -> Line<'static> {
    match app.status_message {
        Some((ref msg, expiry)) if Instant::now() < expiry => Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Yellow),
        )),
        _ => Line::from(Span::styled(
            FOOTER_TEXT,
            Style::default().fg(Color::DarkGray),
        )),
    }
}

// TODO: scroll the grid vertically once layouts outgrow the terminal;
// widgets below the last row are clipped today.
fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    app.grid_area = Some(area);
    app.widget_areas.clear();

    let grid = app.dashboard.grid();
    if app.dashboard.show_grid() {
        draw_column_guides(frame.buffer_mut(), area, grid.cols);
    }

    let active = app.dashboard.active_widget_id().map(str::to_owned);
    for widget in app.dashboard.widgets() {
        let Some(widget_area) = app.scale.grid_rect_to_area(widget.rect(), grid, area) else {
            continue;
        };
        let border = if active.as_deref() == Some(widget.id.as_str()) {
            Color::Yellow
        } else if app.focused.as_deref() == Some(widget.id.as_str()) {
            Color::Cyan
        } else {
            Color::Gray
        };
        render_widget_block(frame, widget, widget_area, border);
        app.widget_areas.push((widget.id.clone(), widget_area));
    }

    let ghost = app
        .dashboard
        .placeholder()
        .zip(app.dashboard.mode())
        .and_then(|(rect, mode)| {
            app.scale
                .grid_rect_to_area(rect, grid, area)
                .map(|ghost_area| (ghost_area, mode))
        });
    if let Some((ghost_area, mode)) = ghost {
        let outline = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Green))
            .title(format!(" {} ", mode));
        frame.render_widget(outline, ghost_area);
    }
}

fn draw_column_guides(buf: &mut Buffer, area: Rect, cols: u32) {
    let cols = u64::from(cols.max(1));
    let width = u64::from(area.width);
    for col in 1..cols {
        // Bounded by area.width, so the cast is lossless.
        let x = area.x + (col * width / cols) as u16;
        for y in area.y..area.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(GUIDE_SYMBOL)
                    .set_style(Style::default().fg(Color::DarkGray));
            }
        }
    }
}

fn render_widget_block(frame: &mut Frame, widget: &Widget, area: Rect, border: Color) {
    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .border_style(Style::default().fg(border))
        .title(format!(" {} · {} ", widget.title, widget.kind));
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            widget.rect().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(payload_summary(widget)),
    ])
    .block(block);
    frame.render_widget(body, area);

    // Resize handles
    if area.width >= 2 && area.height >= 2 {
        let handle = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
        let last_row = area.bottom() - 1;
        let buf = frame.buffer_mut();
        for x in [area.x, area.right() - 1] {
            if let Some(cell) = buf.cell_mut((x, last_row)) {
                cell.set_style(handle);
            }
        }
    }
}

fn payload_summary(widget: &Widget) -> String {
    match &widget.payload {
        serde_json::Value::Array(items) => format!("{} entries", items.len()),
        serde_json::Value::Object(map) => match map.get("url").and_then(|u| u.as_str()) {
            Some(url) => url.to_string(),
            None => format!("{} fields", map.len()),
        },
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
