//! Dashboard controller: the reducer that turns host events into layout
//! updates.
//!
//! [`DashboardState::apply`] is the whole state machine. [`reduce`] is its
//! pure form and [`Dashboard`] is the stateful shell a host keeps around.
//! All reflow goes through a [`LayoutResolver`]; nothing here knows how the
//! layout is actually computed.

use serde::{Deserialize, Serialize};

use super::candidate::{drag_candidate, resize_left_candidate, resize_right_candidate};
use super::pointer::{pointer_to_cell, ContainerBounds, Point};
use super::state::{ActiveGesture, Handle, InteractionState, NoopReason};
use crate::layout::{
    Breakpoints, GeometryPatch, GravityLayout, GridConfig, GridRect, LayoutError, LayoutResolver,
    Widget,
};

/// Input from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// Pointer pressed on a widget's handle.
    PointerDown {
        widget_id: String,
        handle: Handle,
        pointer: Point,
    },
    /// Pointer moved; `container` is the grid's current bounding box.
    PointerMove {
        pointer: Point,
        container: ContainerBounds,
    },
    /// Pointer released anywhere.
    PointerUp,
    /// Viewport width changed, in pixels.
    ViewportResized { width: f64 },
    ToggleGrid,
    RemoveWidget { id: String },
}

/// What an event did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// A gesture began.
    Started { widget_id: String, mode: Handle },
    /// The working layout was recomputed for a new candidate.
    Resolved {
        widget_id: String,
        placeholder: GridRect,
    },
    /// The gesture ended and the working layout became authoritative.
    Committed { widget_id: String },
    /// The event was accepted and ignored.
    Noop { reason: NoopReason },
    GridToggled { show_grid: bool },
    Removed { id: String },
    /// A viewport resize crossed a breakpoint.
    ColumnsChanged { from: u32, to: u32 },
}

impl Effect {
    fn noop(reason: NoopReason) -> Self {
        tracing::debug!(%reason, "event ignored");
        Effect::Noop { reason }
    }
}

/// Everything the controller owns.
///
/// `committed` is the authoritative layout and the baseline every candidate
/// is resolved against. `widgets` is what the host displays; during a
/// gesture it is the latest preview.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    committed: Vec<Widget>,
    widgets: Vec<Widget>,
    grid: GridConfig,
    breakpoints: Breakpoints,
    show_grid: bool,
    interaction: InteractionState,
}

impl DashboardState {
    /// Creates an idle state showing `widgets` as given.
    pub fn new(widgets: Vec<Widget>, grid: GridConfig, breakpoints: Breakpoints) -> Self {
        Self {
            committed: widgets.clone(),
            widgets,
            grid,
            breakpoints,
            show_grid: true,
            interaction: InteractionState::Idle,
        }
    }

    /// Sets whether grid guides are shown.
    pub fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Current (possibly preview) widget list.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Last committed widget list.
    pub fn committed(&self) -> &[Widget] {
        &self.committed
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Applies one event.
    ///
    /// On `Err` the widget lists are left as they were.
    pub fn apply<R: LayoutResolver + ?Sized>(
        &mut self,
        resolver: &R,
        event: &DashboardEvent,
    ) -> Result<Effect, LayoutError> {
        match event {
            DashboardEvent::PointerDown {
                widget_id,
                handle,
                pointer,
            } => Ok(self.pointer_down(widget_id, *handle, *pointer)),
            DashboardEvent::PointerMove { pointer, container } => {
                self.pointer_move(resolver, *pointer, container)
            }
            DashboardEvent::PointerUp => Ok(self.pointer_up()),
            DashboardEvent::ViewportResized { width } => self.viewport_resized(resolver, *width),
            DashboardEvent::ToggleGrid => {
                self.show_grid = !self.show_grid;
                Ok(Effect::GridToggled {
                    show_grid: self.show_grid,
                })
            }
            DashboardEvent::RemoveWidget { id } => Ok(self.remove_widget(id)),
        }
    }

    fn pointer_down(&mut self, widget_id: &str, mode: Handle, pointer: Point) -> Effect {
        if self.interaction.is_active() {
            return Effect::noop(NoopReason::GestureAlreadyActive);
        }
        let Some(widget) = self.widgets.iter().find(|w| w.id == widget_id) else {
            return Effect::noop(NoopReason::UnknownWidget);
        };

        let origin = widget.rect();
        tracing::debug!(id = widget_id, %mode, %origin, "gesture started");
        self.interaction = InteractionState::Active(ActiveGesture {
            widget_id: widget_id.to_string(),
            mode,
            origin,
            last_candidate: origin,
            placeholder: origin,
            pointer,
        });
        Effect::Started {
            widget_id: widget_id.to_string(),
            mode,
        }
    }

    fn pointer_move<R: LayoutResolver + ?Sized>(
        &mut self,
        resolver: &R,
        pointer: Point,
        container: &ContainerBounds,
    ) -> Result<Effect, LayoutError> {
        let InteractionState::Active(gesture) = &mut self.interaction else {
            return Ok(Effect::noop(NoopReason::IdleWithoutGesture));
        };
        gesture.pointer = pointer;

        if !self.committed.iter().any(|w| w.id == gesture.widget_id) {
            return Ok(Effect::noop(NoopReason::ActiveWidgetMissing));
        }
        let Some(cell) = pointer_to_cell(pointer, container, self.grid.cols, self.grid.row_height_px)
        else {
            return Ok(Effect::noop(NoopReason::DegenerateContainer));
        };

        let candidate = match gesture.mode {
            Handle::Drag => drag_candidate(&gesture.origin, cell, self.grid.cols),
            Handle::ResizeRight => resize_right_candidate(&gesture.origin, cell, self.grid.cols),
            Handle::ResizeLeft => resize_left_candidate(&gesture.origin, cell),
        };
        if candidate == gesture.last_candidate {
            return Ok(Effect::noop(NoopReason::SubCellJitter));
        }

        let patch = GeometryPatch::from_rect(gesture.widget_id.clone(), candidate);
        let resolved = resolver.resolve(Some(&patch), &self.committed, self.grid.cols)?;
        let placeholder = resolved
            .iter()
            .find(|w| w.id == gesture.widget_id)
            .map(Widget::rect)
            .unwrap_or(candidate);

        tracing::trace!(id = %gesture.widget_id, %candidate, %placeholder, "candidate resolved");
        gesture.last_candidate = candidate;
        gesture.placeholder = placeholder;
        self.widgets = resolved;
        Ok(Effect::Resolved {
            widget_id: gesture.widget_id.clone(),
            placeholder,
        })
    }

    fn pointer_up(&mut self) -> Effect {
        let InteractionState::Active(gesture) = std::mem::take(&mut self.interaction) else {
            return Effect::noop(NoopReason::IdleWithoutGesture);
        };
        self.committed = self.widgets.clone();
        tracing::debug!(id = %gesture.widget_id, placeholder = %gesture.placeholder, "gesture committed");
        Effect::Committed {
            widget_id: gesture.widget_id,
        }
    }

    fn viewport_resized<R: LayoutResolver + ?Sized>(
        &mut self,
        resolver: &R,
        width: f64,
    ) -> Result<Effect, LayoutError> {
        if !width.is_finite() || width < 0.0 {
            return Ok(Effect::noop(NoopReason::DegenerateContainer));
        }
        let from = self.grid.cols;
        let to = self.breakpoints.cols_for_width(width);
        if to == from {
            return Ok(Effect::noop(NoopReason::ColumnsUnchanged));
        }

        match &mut self.interaction {
            InteractionState::Active(gesture) => {
                // Keep the gesture's last candidate authoritative at the new width.
                let patch = GeometryPatch::from_rect(gesture.widget_id.clone(), gesture.last_candidate);
                let resolved = resolver.resolve(Some(&patch), &self.committed, to)?;
                if let Some(widget) = resolved.iter().find(|w| w.id == gesture.widget_id) {
                    gesture.placeholder = widget.rect();
                }
                self.widgets = resolved;
            }
            InteractionState::Idle => {
                self.widgets = resolver.resolve(None, &self.committed, to)?;
            }
        }

        self.grid.cols = to;
        tracing::debug!(width, from, to, "columns changed");
        Ok(Effect::ColumnsChanged { from, to })
    }

    fn remove_widget(&mut self, id: &str) -> Effect {
        let before = (self.committed.len(), self.widgets.len());
        self.committed.retain(|w| w.id != id);
        self.widgets.retain(|w| w.id != id);
        if before == (self.committed.len(), self.widgets.len()) {
            return Effect::noop(NoopReason::UnknownWidget);
        }
        tracing::debug!(id, "widget removed");
        Effect::Removed { id: id.to_string() }
    }
}

/// Pure reducer: returns the next state and the effect of `event`.
///
/// `state` is not modified; on `Err` the caller still holds the previous
/// state.
pub fn reduce<R: LayoutResolver + ?Sized>(
    resolver: &R,
    state: &DashboardState,
    event: &DashboardEvent,
) -> Result<(DashboardState, Effect), LayoutError> {
    let mut next = state.clone();
    let effect = next.apply(resolver, event)?;
    Ok((next, effect))
}

/// Stateful controller a host feeds events into.
#[derive(Debug, Clone)]
pub struct Dashboard<R: LayoutResolver = GravityLayout> {
    resolver: R,
    state: DashboardState,
}

impl Dashboard<GravityLayout> {
    /// Creates a controller backed by [`GravityLayout`].
    pub fn new(widgets: Vec<Widget>, grid: GridConfig, breakpoints: Breakpoints) -> Self {
        Self::with_resolver(GravityLayout, widgets, grid, breakpoints)
    }
}

impl<R: LayoutResolver> Dashboard<R> {
    /// Creates a controller backed by `resolver`.
    pub fn with_resolver(
        resolver: R,
        widgets: Vec<Widget>,
        grid: GridConfig,
        breakpoints: Breakpoints,
    ) -> Self {
        Self {
            resolver,
            state: DashboardState::new(widgets, grid, breakpoints),
        }
    }

    /// Sets whether grid guides are shown.
    pub fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.state.show_grid = show_grid;
        self
    }

    /// Feeds one event through the state machine.
    ///
    /// A [`LayoutError`] is logged and returned; the previous layout stays
    /// on screen.
    pub fn handle(&mut self, event: DashboardEvent) -> Result<Effect, LayoutError> {
        self.state.apply(&self.resolver, &event).map_err(|e| {
            tracing::error!(error = %e, ?event, "layout resolution failed, keeping previous layout");
            e
        })
    }

    /// Replaces both layouts with the normalized `widgets` and ends any gesture.
    pub fn reset(&mut self, widgets: Vec<Widget>) -> Result<(), LayoutError> {
        let normalized = self.resolver.resolve(None, &widgets, self.state.grid.cols)?;
        self.state.committed = normalized.clone();
        self.state.widgets = normalized;
        self.state.interaction = InteractionState::Idle;
        Ok(())
    }

    /// Normalizes the current committed layout in place.
    pub fn normalize(&mut self) -> Result<(), LayoutError> {
        let committed = self.state.committed.clone();
        self.reset(committed)
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn widgets(&self) -> &[Widget] {
        self.state.widgets()
    }

    pub fn committed(&self) -> &[Widget] {
        self.state.committed()
    }

    pub fn cols(&self) -> u32 {
        self.state.cols()
    }

    pub fn grid(&self) -> GridConfig {
        self.state.grid()
    }

    pub fn show_grid(&self) -> bool {
        self.state.show_grid()
    }

    pub fn interaction(&self) -> &InteractionState {
        self.state.interaction()
    }

    pub fn placeholder(&self) -> Option<GridRect> {
        self.state.interaction.placeholder()
    }

    pub fn active_widget_id(&self) -> Option<&str> {
        self.state.interaction.active_widget_id()
    }

    pub fn mode(&self) -> Option<Handle> {
        self.state.interaction.mode()
    }
}
