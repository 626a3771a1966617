//! Wheel handling - zoom about the cursor.

use crate::editor::Framebox;
use crate::input::events::{InputResponse, WheelEvent};

impl Framebox {
    /// Zoom the view about the wheel position. Ignored while panning, so a
    /// scroll mid-pan cannot fight the offset anchor. A consumed response
    /// tells the host to suppress its default scroll behavior.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> InputResponse {
        let mut response = InputResponse::ignored();
        if !event.on_surface {
            return response;
        }

        if self.input.is_panning() {
            return response;
        }

        self.view.zoom(event.surface_pos, event.delta_y);
        self.scheduler.request_redraw();
        response.redraw_requested = true;
        response.event_consumed = true;
        response
    }
}
