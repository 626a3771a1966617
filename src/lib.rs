//! Framebox - interactive region-of-interest selection for video frame annotation.
//!
//! This crate implements the selection/transform engine that sits between a
//! host UI layer and a software raster surface: a single rectangular
//! region-of-interest drawn, moved, and resized over a pannable, zoomable
//! view of a still frame.
//!
//! The engine is toolkit-agnostic. Hosts translate their native pointer and
//! wheel events into the typed commands in [`input::events`], feed them to a
//! [`Framebox`] session, and drive [`Framebox::render_frame`] from their
//! display-refresh callback. Painting happens into a caller-provided
//! `tiny_skia::Pixmap`.
//!
//! ## Modules
//!
//! - `types` - Core geometry and boundary types
//! - `constants` - Zoom bounds, border sizing, checkerboard geometry
//! - `transform` - The pan/zoom view transform
//! - `selection` - Selection rectangle geometry and hit classification
//! - `input` - Pointer-event state machine and typed event commands
//! - `render` - Redraw coalescing and the canvas paint pass
//! - `editor` - The `Framebox` session tying the engine together
//! - `frame` - Frame raster loading and conversion
//! - `perf` - Profiling instrumentation

pub mod constants;
pub mod editor;
pub mod frame;
pub mod input;
pub mod perf;
pub mod render;
pub mod selection;
pub mod transform;
pub mod types;

pub use editor::Framebox;
pub use frame::{Frame, FrameError};
pub use input::{InputResponse, InputState, Modifiers, PointerButton, PointerEvent, WheelEvent};
pub use render::{RenderMode, RenderScheduler};
pub use selection::SelectionArea;
pub use transform::{TransformParts, ViewTransform};
pub use types::{BorderSide, Point, RegionHit, RegionRecord, ResizeSides, point};
