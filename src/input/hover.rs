//! Surface enter/leave tracking and the space-held pan chord.

use crate::editor::Framebox;
use crate::input::events::{InputResponse, PointerEvent};
use crate::input::state::InputState;

impl Framebox {
    /// The pointer entered the editing surface.
    pub fn handle_mouse_enter(&mut self, event: &PointerEvent) -> InputResponse {
        let mut response = InputResponse::ignored();
        if !event.on_surface {
            return response;
        }

        self.pointer.over_surface = true;
        if self.input.is_idle() {
            self.input = InputState::Hovering;
        }
        response.event_consumed = true;
        response
    }

    /// The pointer left the editing surface.
    ///
    /// A pan in progress is forced back to Idle so the view cannot stay
    /// stuck to a pointer the surface no longer sees. Geometry gestures are
    /// left alone; hosts with pointer capture keep delivering moves.
    pub fn handle_mouse_leave(&mut self, event: &PointerEvent) -> InputResponse {
        let mut response = InputResponse::ignored();
        if !event.on_surface {
            return response;
        }

        self.pointer.over_surface = false;
        if self.input.is_panning() || self.input.is_hovering() {
            self.input = InputState::Idle;
        }
        response.event_consumed = true;
        response
    }

    /// Host keybinding signal: whether the space bar is currently held.
    /// Space+left-drag pans the view.
    pub fn set_space_held(&mut self, held: bool) {
        self.pointer.space_held = held;
    }
}
