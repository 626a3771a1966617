//! Pointer and wheel input handling for the editing surface.
//!
//! This module implements all pointer interaction logic for the framebox
//! engine: drawing a new rectangle, dragging or resizing the existing one,
//! panning the view, and hover classification.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode, making impossible states unrepresentable.
//! Hosts feed the typed commands in `events` to the handler methods on
//! [`crate::Framebox`]; each handler returns an [`InputResponse`] listing
//! what the host should do next (schedule a redraw, suppress the default
//! scroll, restyle the cursor).
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `events` - Typed pointer/wheel commands and the handler response
//! - `mouse_down` - Pointer-down handling (gesture selection)
//! - `drag` - Pointer-move handling (pan, draw, drag, resize, hover)
//! - `mouse_up` - Pointer-up handling (settle back to rest)
//! - `wheel` - Wheel zoom handling
//! - `hover` - Surface enter/leave and the space-held signal

pub mod events;
mod drag;
mod hover;
mod mouse_down;
mod mouse_up;
mod state;
mod wheel;

pub use events::{InputResponse, Modifiers, PointerButton, PointerEvent, WheelEvent};
pub use state::InputState;
