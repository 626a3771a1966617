//! Input state machine - unified state management for all pointer
//! interactions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle/Hovering -> Panning     (ctrl+left, space+left, or middle button down)
//! Idle/Hovering -> Dragging    (left down inside the rectangle)
//! Idle/Hovering -> Resizing    (left down on the rectangle border band)
//! Idle/Hovering -> Drawing     (left down outside the rectangle)
//!
//! Any -> Hovering/Idle         (pointer up; Hovering when still over the surface)
//! Panning -> Idle              (pointer leaves the surface mid-pan)
//! ```

use crate::types::{Point, ResizeSides};

/// The active pointer interaction. Exactly one state at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No interaction, pointer not over the surface
    Idle,

    /// Pointer over the surface, no gesture in progress
    Hovering,

    /// View panning (ctrl/space + left drag, or middle drag)
    Panning {
        /// View offset at the moment the pan started
        zero_offset: Point,
        /// Pointer screen position at the moment the pan started
        start_screen: Point,
    },

    /// Dragging out a new rectangle from a fixed anchor
    Drawing,

    /// Moving the existing rectangle, grab offset preserved
    Dragging,

    /// Resizing one or two edges of the existing rectangle
    Resizing { sides: ResizeSides },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Returns true while any geometry or view gesture is in progress.
    pub fn in_gesture(&self) -> bool {
        !matches!(self, Self::Idle | Self::Hovering)
    }

    /// Get the pan anchor (zero offset, start screen position), if panning.
    pub fn pan_anchor(&self) -> Option<(Point, Point)> {
        match self {
            Self::Panning { zero_offset, start_screen } => Some((*zero_offset, *start_screen)),
            _ => None,
        }
    }

    /// Get the active resize sides, if resizing.
    pub fn resize_sides(&self) -> Option<ResizeSides> {
        match self {
            Self::Resizing { sides } => Some(*sides),
            _ => None,
        }
    }

    /// Start a pan, capturing the current view offset and pointer screen
    /// position as the anchor.
    pub fn start_panning(&mut self, zero_offset: Point, start_screen: Point) {
        *self = Self::Panning { zero_offset, start_screen };
    }

    pub fn start_drawing(&mut self) {
        *self = Self::Drawing;
    }

    pub fn start_dragging(&mut self) {
        *self = Self::Dragging;
    }

    pub fn start_resizing(&mut self, sides: ResizeSides) {
        *self = Self::Resizing { sides };
    }

    /// End the current gesture: back to Hovering while the pointer remains
    /// over the surface, Idle otherwise.
    pub fn settle(&mut self, over_surface: bool) {
        *self = if over_surface { Self::Hovering } else { Self::Idle };
    }
}
