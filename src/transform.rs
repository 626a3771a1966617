//! The pan/zoom view transform.
//!
//! A uniform-scale affine transform with no rotation or skew, mapping
//! between view coordinates (surface pixels) and world coordinates (frame
//! content): `view = world * scale + offset`.
//!
//! Mutations are pure state updates; the calling handler is responsible for
//! requesting a redraw afterwards.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_FACTOR};
use crate::types::{Point, point};
use serde::{Deserialize, Serialize};

/// An explicit transform supplied by the host alongside a frame, e.g. to
/// restore a previously persisted viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformParts {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Maps between view (surface pixel) and world (frame content) coordinates.
///
/// Interactive mutation keeps `scale` within `[MIN_SCALE, MAX_SCALE]`.
/// Host-supplied parts are stored as given; a degenerate scale (`<= 0`) is
/// tolerated by substituting `1.0` for the inverse scale wherever the
/// transform is inverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    scale: f32,
    offset: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Identity-like default: scale 1, zero offset.
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset: Point::default(),
        }
    }

    /// Build from host-supplied parts, as given.
    pub fn from_parts(parts: TransformParts) -> Self {
        Self {
            scale: parts.scale,
            offset: point(parts.offset_x, parts.offset_y),
        }
    }

    pub fn parts(&self) -> TransformParts {
        TransformParts {
            scale: self.scale,
            offset_x: self.offset.x,
            offset_y: self.offset.y,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    #[inline]
    fn inverse_scale(&self) -> f32 {
        if self.scale > 0.0 { 1.0 / self.scale } else { 1.0 }
    }

    /// Convert a view point to world coordinates.
    #[inline]
    pub fn to_world(&self, view: Point) -> Point {
        let inv = self.inverse_scale();
        point((view.x - self.offset.x) * inv, (view.y - self.offset.y) * inv)
    }

    /// Convert a world point to view coordinates.
    #[inline]
    pub fn to_view(&self, world: Point) -> Point {
        point(
            world.x * self.scale + self.offset.x,
            world.y * self.scale + self.offset.y,
        )
    }

    /// Replace the offset, preserving scale.
    pub fn pan(&mut self, new_offset: Point) {
        self.offset = new_offset;
    }

    /// Zoom about a pivot given in view coordinates, keeping the world point
    /// currently under the pivot fixed on screen.
    ///
    /// Positive wheel delta zooms out; the resulting scale is clamped to
    /// `[MIN_SCALE, MAX_SCALE]`.
    pub fn zoom(&mut self, pivot_view: Point, delta_y: f32) {
        let prev = if self.scale > 0.0 { self.scale } else { 1.0 };
        let new_scale = (prev + delta_y * WHEEL_ZOOM_FACTOR).clamp(MIN_SCALE, MAX_SCALE);
        let change = new_scale / prev;

        // Translate-by-pivot, scale, translate-back, composed with the
        // current transform.
        self.offset = point(
            pivot_view.x + change * (self.offset.x - pivot_view.x),
            pivot_view.y + change * (self.offset.y - pivot_view.y),
        );
        self.scale = new_scale;
    }

    /// Fit freshly loaded content into the viewport and center it.
    ///
    /// Per axis the target span is half the larger of (content doubled) vs
    /// the viewport, so small content is enlarged to half the viewport while
    /// content at least half the viewport keeps its native scale. The axis
    /// minimum wins and is clamped to the zoom range.
    pub fn fit_to_content(
        &mut self,
        content_width: f32,
        content_height: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        if content_width <= 0.0 || content_height <= 0.0 {
            return;
        }

        let target_w = (content_width * 2.0).max(viewport_width) / 2.0;
        let target_h = (content_height * 2.0).max(viewport_height) / 2.0;
        let scale = (target_w / content_width)
            .min(target_h / content_height)
            .clamp(MIN_SCALE, MAX_SCALE);

        self.scale = scale;
        self.offset = point(
            (viewport_width - content_width * scale) / 2.0,
            (viewport_height - content_height * scale) / 2.0,
        );
    }
}
