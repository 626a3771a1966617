//! Pointer-move handling - pan, draw, drag, resize, and hover feedback.
//!
//! Pointer move is a hot path during gestures (60+ events per second), so
//! each arm does the minimal geometry update and a single redraw request.

use crate::editor::Framebox;
use crate::input::events::{InputResponse, PointerEvent};
use crate::input::state::InputState;
use crate::profile_scope;

impl Framebox {
    /// Route a pointer-move to the active gesture, or report hover feedback
    /// when no gesture is in progress.
    ///
    /// Panning recomputes the offset from the anchor delta in screen
    /// coordinates; geometry gestures work on the event converted to world
    /// coordinates. A pure hover move mutates nothing and only returns the
    /// region classification for cursor styling.
    pub fn handle_mouse_move(&mut self, event: &PointerEvent) -> InputResponse {
        profile_scope!("handle_mouse_move");

        let mut response = InputResponse::ignored();
        if !event.on_surface {
            return response;
        }

        match self.input {
            InputState::Panning { zero_offset, start_screen } => {
                let delta = event.screen_pos - start_screen;
                self.view.pan(zero_offset + delta);
                self.scheduler.request_redraw();
                response.redraw_requested = true;
                response.event_consumed = true;
            }
            InputState::Dragging => {
                let world = self.view.to_world(event.surface_pos);
                self.selection.translate(world);
                self.scheduler.request_redraw();
                response.redraw_requested = true;
                response.event_consumed = true;
            }
            InputState::Resizing { sides } => {
                let world = self.view.to_world(event.surface_pos);
                self.selection.resize(world, sides);
                self.scheduler.request_redraw();
                response.redraw_requested = true;
                response.event_consumed = true;
            }
            InputState::Drawing => {
                let world = self.view.to_world(event.surface_pos);
                self.selection.draw(world);
                self.scheduler.request_redraw();
                response.redraw_requested = true;
                response.event_consumed = true;
            }
            InputState::Idle | InputState::Hovering => {
                let world = self.view.to_world(event.surface_pos);
                response.hover = Some(self.selection.detect_region(world));
                if self.pointer.over_surface {
                    self.input = InputState::Hovering;
                }
            }
        }

        response
    }
}
