//! The Framebox session state.

use crate::frame::Frame;
use crate::input::InputState;
use crate::perf::PerfMonitor;
use crate::render::{RenderMode, RenderScheduler};
use crate::selection::SelectionArea;
use crate::transform::ViewTransform;

/// Transient pointer facts outside the state machine proper.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerFlags {
    /// The pointer is currently over the editing surface
    pub over_surface: bool,
    /// The host reports the space bar held (space+drag pans)
    pub space_held: bool,
}

/// One interactive editing session: a single selection rectangle over a
/// pannable, zoomable view of a still frame.
///
/// All handlers and the paint driver run on the host's event-loop thread to
/// completion, so no field needs locking. The only asynchronous boundary is
/// frame decoding, which hosts perform off-thread before handing the result
/// to `set_frame`.
pub struct Framebox {
    pub view: ViewTransform,
    pub selection: SelectionArea,
    pub input: InputState,
    pub pointer: PointerFlags,
    pub scheduler: RenderScheduler,
    pub render_mode: RenderMode,
    pub perf: PerfMonitor,
    pub(crate) frame: Option<Frame>,
    pub(crate) surface_width: u32,
    pub(crate) surface_height: u32,
}
