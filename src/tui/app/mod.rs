//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the render loop. All
//! layout decisions are delegated to the wrapped [`Dashboard`].

use crate::interaction::{Dashboard, DashboardEvent, Effect, Handle};
use crate::layout::Widget;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::scale::CellScale;
use crate::tui::ui::render_dashboard;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// How long a status message stays in the footer.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Count of ticks processed.
    pub tick_count: u64,
    /// The dashboard driven by this terminal.
    pub dashboard: Dashboard,
    /// Pixel size of a terminal cell.
    pub scale: CellScale,
    /// Tick interval of the event loop.
    pub tick_rate: Duration,
    /// Widget selected by the last click, target of `x`.
    pub focused: Option<String>,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Terminal area the grid was last drawn into.
    ///
    /// Updated during each render pass. `None` until the first render.
    pub grid_area: Option<Rect>,
    /// Terminal areas of the widgets drawn by the last render, in draw order.
    pub widget_areas: Vec<(String, Rect)>,
    /// Layout restored by `r`.
    initial: Vec<Widget>,
}

impl App {
    /// Creates an App around `dashboard`, remembering its layout for reset.
    pub fn new(dashboard: Dashboard, scale: CellScale, tick_rate: Duration) -> Self {
        let initial = dashboard.committed().to_vec();
        Self {
            should_quit: false,
            tick_count: 0,
            dashboard,
            scale,
            tick_rate,
            focused: None,
            status_message: None,
            grid_area: None,
            widget_areas: Vec::new(),
            initial,
        }
    }

    /// Forwards `event` to the dashboard.
    ///
    /// A layout failure leaves the dashboard untouched and is reported in the
    /// footer instead of ending the session.
    pub fn dispatch(&mut self, event: DashboardEvent) -> Option<Effect> {
        match self.dashboard.handle(event) {
            Ok(effect) => Some(effect),
            Err(e) => {
                self.set_status(format!("Layout error: {}", e));
                None
            }
        }
    }

    /// Shows `message` in the footer for a short while.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Applies a key action.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleGrid => {
                self.dispatch(DashboardEvent::ToggleGrid);
            }
            Action::RemoveFocused => self.remove_focused(),
            Action::Reset => self.reset_layout(),
            Action::Unfocus => self.focused = None,
            Action::None => {}
        }
    }

    /// Removes the focused widget, if any.
    pub fn remove_focused(&mut self) {
        let Some(id) = self.focused.take() else {
            self.set_status("Click a widget first");
            return;
        };
        if let Some(Effect::Removed { id }) = self.dispatch(DashboardEvent::RemoveWidget { id }) {
            self.set_status(format!("Removed {}", id));
        }
    }

    /// Restores the layout the session started with.
    pub fn reset_layout(&mut self) {
        self.focused = None;
        match self.dashboard.reset(self.initial.clone()) {
            Ok(()) => self.set_status("Layout reset"),
            Err(e) => self.set_status(format!("Layout error: {}", e)),
        }
    }

    /// Reports a new terminal width to the dashboard.
    pub fn handle_resize(&mut self, columns: u16) {
        let width = self.scale.viewport_width(columns);
        self.dispatch(DashboardEvent::ViewportResized { width });
    }

    /// Finds the widget under a terminal cell and the handle it grabs.
    ///
    /// The top border row grabs the drag handle and the two bottom corners
    /// grab the resize handles. Any other cell of a widget only focuses it.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(String, Option<Handle>)> {
        let (id, area) = self.widget_areas.iter().rev().find(|(_, area)| {
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        })?;

        let last_row = area.bottom().saturating_sub(1);
        let last_col = area.right().saturating_sub(1);
        let handle = if row == last_row && column == area.x {
            Some(Handle::ResizeLeft)
        } else if row == last_row && column == last_col {
            Some(Handle::ResizeRight)
        } else if row == area.y {
            Some(Handle::Drag)
        } else {
            None
        };
        Some((id.clone(), handle))
    }

    /// Translates a mouse event into dashboard events.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let pointer = self.scale.to_point(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((widget_id, handle)) = self.hit_test(mouse.column, mouse.row) else {
                    self.focused = None;
                    return;
                };
                self.focused = Some(widget_id.clone());
                if let Some(handle) = handle {
                    self.dispatch(DashboardEvent::PointerDown {
                        widget_id,
                        handle,
                        pointer,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(area) = self.grid_area else {
                    return;
                };
                let container = self.scale.container(area);
                self.dispatch(DashboardEvent::PointerMove { pointer, container });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.dashboard.interaction().is_active() {
                    self.dispatch(DashboardEvent::PointerUp);
                }
            }
            _ => {}
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        let size = terminal.size()?;
        self.handle_resize(size.width);
        terminal.draw(|frame| render_dashboard(frame, self))?;

        loop {
            let event = event_handler.next(&mut reader).await?;
            let should_render = match event {
                Event::Key(key) => {
                    self.apply_action(handle_key_event(key));
                    if self.should_quit {
                        return Ok(());
                    }
                    true
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                    true
                }
                Event::Resize(columns, _) => {
                    self.handle_resize(columns);
                    true
                }
                Event::Tick => {
                    self.tick_count += 1;
                    let had_message = self.status_message.is_some();
                    self.expire_status_message();
                    had_message && self.status_message.is_none()
                }
            };

            if should_render {
                terminal.draw(|frame| render_dashboard(frame, self))?;
            }
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;
