//! Pointer-up handling - settle every gesture back to rest.

use crate::editor::Framebox;
use crate::input::events::{InputResponse, PointerEvent};

impl Framebox {
    /// End the active gesture. The selection geometry is kept as-is; only
    /// the interaction state resets, to Hovering while the pointer remains
    /// over the surface and Idle otherwise.
    pub fn handle_mouse_up(&mut self, event: &PointerEvent) -> InputResponse {
        let mut response = InputResponse::ignored();
        if !event.on_surface {
            return response;
        }

        response.event_consumed = self.input.in_gesture();
        self.input.settle(self.pointer.over_surface);
        response
    }
}
