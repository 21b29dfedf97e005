//! Planner driver: applies input events and redraws after each change.

use waypointkit_core::GeoError;

use crate::planner_state::{InputEvent, PlannerState, Update};
use crate::renderer::Renderer;
use crate::table::TableView;

/// Couples a [`PlannerState`] with a [`Renderer`].
///
/// Every event that changes the state is followed by exactly one
/// synchronous redraw before `dispatch` returns.
pub struct Planner<R: Renderer> {
    state: PlannerState,
    renderer: R,
}

impl<R: Renderer> Planner<R> {
    /// Creates a driver and draws the initial, empty surface.
    pub fn new(state: PlannerState, mut renderer: R) -> Self {
        renderer.redraw(&state.frame());
        Self { state, renderer }
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Current table view.
    pub fn table(&self) -> TableView {
        self.state.table()
    }

    /// Applies one event, redrawing if it changed anything.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Update, GeoError> {
        let update = self.state.apply(event)?;
        if update.is_changed() {
            self.renderer.redraw(&self.state.frame());
        }
        Ok(update)
    }

    /// Applies events in order, stopping at the first rejected one.
    pub fn dispatch_all<I>(&mut self, events: I) -> Result<usize, GeoError>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut changed = 0;
        for event in events {
            if self.dispatch(event)?.is_changed() {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Splits the driver back into its parts.
    pub fn into_parts(self) -> (PlannerState, R) {
        (self.state, self.renderer)
    }
}
