//! Session construction, frame swapping, and the paint driver.

use super::state::{Framebox, PointerFlags};
use crate::constants::DEFAULT_BORDER_SIZE;
use crate::frame::Frame;
use crate::input::InputState;
use crate::perf::PerfMonitor;
use crate::profile_scope;
use crate::render::canvas::{self, Scene};
use crate::render::{RenderMode, RenderScheduler};
use crate::selection::SelectionArea;
use crate::transform::{TransformParts, ViewTransform};
use crate::types::RegionRecord;
use tiny_skia::Pixmap;
use tracing::debug;

impl Framebox {
    /// Create a session for a surface of the given pixel size.
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            view: ViewTransform::new(),
            selection: SelectionArea::new(DEFAULT_BORDER_SIZE),
            input: InputState::default(),
            pointer: PointerFlags::default(),
            scheduler: RenderScheduler::new(),
            render_mode: RenderMode::default(),
            perf: PerfMonitor::new(),
            frame: None,
            surface_width,
            surface_height,
        }
    }

    /// Swap in a freshly decoded frame.
    ///
    /// With an explicit transform the view restores it verbatim; without
    /// one the frame is fitted and centered in the viewport. Either way the
    /// scene is marked dirty. Interaction state is untouched - a frame
    /// arriving mid-gesture must not cancel the gesture.
    pub fn set_frame(&mut self, frame: Frame, transform: Option<TransformParts>) {
        match transform {
            Some(parts) => self.view = ViewTransform::from_parts(parts),
            None => self.view.fit_to_content(
                frame.width() as f32,
                frame.height() as f32,
                self.surface_width as f32,
                self.surface_height as f32,
            ),
        }
        debug!(width = frame.width(), height = frame.height(), "frame swapped");
        self.frame = Some(frame);
        self.scheduler.request_redraw();
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// The host surface was resized.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;
        self.scheduler.request_redraw();
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if self.render_mode != mode {
            self.render_mode = mode;
            self.scheduler.request_redraw();
        }
    }

    /// Current rectangle geometry in world coordinates, readable at any
    /// time for persistence.
    pub fn region(&self) -> RegionRecord {
        self.selection.record()
    }

    /// Mark the scene dirty. Returns true when the host should schedule a
    /// frame callback.
    pub fn request_redraw(&mut self) -> bool {
        self.scheduler.request_redraw()
    }

    /// The host's display-refresh callback. Paints into the surface if the
    /// scene is dirty and reports whether a paint happened.
    pub fn render_frame(&mut self, surface: &mut Pixmap) -> bool {
        profile_scope!("render_frame");

        if !self.scheduler.on_frame() {
            return false;
        }

        self.perf.begin_frame();
        let scene = Scene {
            view: &self.view,
            frame: self.frame.as_ref(),
            selection: &self.selection,
            mode: self.render_mode,
        };
        canvas::paint(surface, &scene);
        self.perf.end_frame();
        true
    }
}
