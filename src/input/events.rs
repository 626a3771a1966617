//! Typed input commands and handler outcomes.
//!
//! Hosts translate their native pointer/wheel events into these commands,
//! decoupling the engine from any specific UI toolkit. `on_surface` carries
//! the host's event-target check: handlers treat events that do not target
//! the editing surface as no-ops.

use crate::types::{Point, RegionHit};
use serde::{Deserialize, Serialize};

/// Which pointer button an event refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Left,
    Middle,
    Right,
}

impl PointerButton {
    /// Map a DOM-style numeric button code. Unknown codes fall back to
    /// `Right`, which no handler acts on.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            _ => Self::Right,
        }
    }
}

/// Keyboard modifiers captured with a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub control: bool,
}

/// A pointer down/move/up/enter/leave command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Whether the event targets the editing surface
    pub on_surface: bool,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// Position relative to the surface origin (view coordinates)
    pub surface_pos: Point,
    /// Position in host screen coordinates, used as the pan anchor
    pub screen_pos: Point,
}

/// A wheel command over the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub on_surface: bool,
    /// Position relative to the surface origin (view coordinates)
    pub surface_pos: Point,
    pub delta_y: f32,
}

/// Explicit outcome of an input handler.
///
/// Replaces hidden side effects: the handler mutates engine state and tells
/// the host what follow-up it owes — scheduling a redraw callback,
/// suppressing the default event behavior, or restyling the cursor from
/// fresh hover feedback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputResponse {
    /// The engine marked itself dirty and a frame callback should run
    pub redraw_requested: bool,
    /// The event was acted on; the host should suppress its default behavior
    pub event_consumed: bool,
    /// Fresh hover classification for cursor styling, when one was computed
    pub hover: Option<RegionHit>,
}

impl InputResponse {
    /// The no-op response for ignored events.
    pub fn ignored() -> Self {
        Self::default()
    }
}
