//! Pointer-down handling - pan capture and gesture selection.

use crate::editor::Framebox;
use crate::input::events::{InputResponse, PointerButton, PointerEvent};
use crate::profile_scope;
use crate::types::{BorderSide, ResizeSides};

impl Framebox {
    /// Decide which gesture a pointer-down starts.
    ///
    /// Ctrl+left, space+left, or middle button enter a pan, capturing the
    /// current view offset and the pointer's screen position as the anchor.
    /// A plain left press is classified against the rectangle in world
    /// coordinates: inside drags it, a border band resizes it, anywhere else
    /// anchors a new draw.
    pub fn handle_mouse_down(&mut self, event: &PointerEvent) -> InputResponse {
        profile_scope!("handle_mouse_down");

        let mut response = InputResponse::ignored();
        if !event.on_surface {
            return response;
        }

        let is_left = event.button == PointerButton::Left;
        let pan_chord = event.modifiers.control || self.pointer.space_held;

        if (is_left && pan_chord) || event.button == PointerButton::Middle {
            self.input
                .start_panning(self.view.offset(), event.screen_pos);
            response.event_consumed = true;
            return response;
        }

        if is_left {
            let world = self.view.to_world(event.surface_pos);
            let hit = self.selection.detect_region(world);
            response.hover = Some(hit);

            if hit.is_inside {
                self.selection.start_translate(world);
                self.input.start_dragging();
            } else if hit.border_side != BorderSide::None {
                self.input
                    .start_resizing(ResizeSides::from(hit.border_side));
            } else {
                self.selection.start_draw(world);
                self.input.start_drawing();
            }
            response.event_consumed = true;
        }

        response
    }
}
