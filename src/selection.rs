//! Selection rectangle geometry and hit classification.
//!
//! The rectangle lives in world coordinates. Hit classification is a
//! three-tier test: beyond the outer margin box is outside, within the
//! rectangle bounds (inclusive) is inside, and the remaining ring of margin
//! bands classifies into one of eight border sides with corner precedence.
//! The rectangle boundary itself counts as inside, not border.

use crate::constants::MIN_BORDER_SIZE;
use crate::transform::{TransformParts, ViewTransform};
use crate::types::{BorderSide, Point, RegionHit, RegionRecord, ResizeSides};

/// The single selection rectangle of an editing session.
///
/// `width == 0 || height == 0` is a legal state (`is_defined` is false); an
/// undefined rectangle never reports inside or border hits. The anchor and
/// translate offset are ephemeral gesture state, never persisted.
#[derive(Clone, Debug)]
pub struct SelectionArea {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    border_size: f32,
    draw_anchor: Point,
    translate_offset: Point,
}

impl Default for SelectionArea {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_BORDER_SIZE)
    }
}

impl SelectionArea {
    /// Create an empty selection with the given border band width
    /// (floored at `MIN_BORDER_SIZE`).
    pub fn new(border_size: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            border_size: border_size.max(MIN_BORDER_SIZE),
            draw_anchor: Point::default(),
            translate_offset: Point::default(),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn border_size(&self) -> f32 {
        self.border_size
    }

    pub fn x_min(&self) -> f32 {
        self.x
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_min(&self) -> f32 {
        self.y
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// Current geometry as the plain numeric record persistence consumes.
    pub fn record(&self) -> RegionRecord {
        RegionRecord {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Assign geometry directly, e.g. to seed the selection from an
    /// object-detection candidate box. Negative sizes are floored at zero.
    pub fn place(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Transform that brings the rectangle's origin to the surface origin
    /// at the view's current scale. Hosts use it to crop the selected
    /// region out of the frame raster.
    pub fn bounding_transform(&self, view: &ViewTransform) -> TransformParts {
        let scale = view.scale();
        TransformParts {
            scale,
            offset_x: -self.x * scale,
            offset_y: -self.y * scale,
        }
    }

    /// Classify a world-space point against the rectangle.
    pub fn detect_region(&self, point: Point) -> RegionHit {
        if !self.is_defined() || !self.within_outer_margin(point) {
            return RegionHit::outside();
        }

        if point.x >= self.x_min()
            && point.x <= self.x_max()
            && point.y >= self.y_min()
            && point.y <= self.y_max()
        {
            return RegionHit::inside();
        }

        RegionHit::border(self.classify_border(point))
    }

    fn within_outer_margin(&self, point: Point) -> bool {
        point.x >= self.x_min() - self.border_size
            && point.x <= self.x_max() + self.border_size
            && point.y >= self.y_min() - self.border_size
            && point.y <= self.y_max() + self.border_size
    }

    /// Combine the margin bands a point falls in into a border side.
    /// Tier 1 already bounded the point to the outer margin box, so each
    /// band check only needs the inner edge.
    fn classify_border(&self, point: Point) -> BorderSide {
        let left = point.x < self.x_min();
        let right = point.x > self.x_max();
        let top = point.y < self.y_min();
        let bottom = point.y > self.y_max();

        match (top, bottom, left, right) {
            (true, _, true, _) => BorderSide::TopLeft,
            (true, _, _, true) => BorderSide::TopRight,
            (_, true, true, _) => BorderSide::BottomLeft,
            (_, true, _, true) => BorderSide::BottomRight,
            (true, _, _, _) => BorderSide::Top,
            (_, true, _, _) => BorderSide::Bottom,
            (_, _, true, _) => BorderSide::Left,
            (_, _, _, true) => BorderSide::Right,
            _ => BorderSide::None,
        }
    }

    /// Fix the anchor corner for a drag-to-draw gesture.
    pub fn start_draw(&mut self, anchor: Point) {
        self.draw_anchor = anchor;
        self.x = anchor.x;
        self.y = anchor.y;
        self.width = 0.0;
        self.height = 0.0;
    }

    /// Stretch the rectangle between the fixed anchor and the moving point.
    pub fn draw(&mut self, point: Point) {
        self.x = self.draw_anchor.x.min(point.x);
        self.y = self.draw_anchor.y.min(point.y);
        self.width = (self.draw_anchor.x - point.x).abs();
        self.height = (self.draw_anchor.y - point.y).abs();
    }

    /// Record the grab offset so a drag keeps the rectangle under the same
    /// spot of the cursor instead of jumping to it.
    pub fn start_translate(&mut self, point: Point) {
        self.translate_offset = Point { x: self.x, y: self.y } - point;
    }

    /// Move the rectangle to follow the cursor, preserving the grab offset.
    /// Size is unchanged.
    pub fn translate(&mut self, point: Point) {
        self.x = point.x + self.translate_offset.x;
        self.y = point.y + self.translate_offset.y;
    }

    /// Recompute the active edges from the cursor, holding opposite edges
    /// fixed. A computed size of exactly zero collapses the rectangle; a
    /// negative computed size rejects that edge's update, holding the prior
    /// value.
    pub fn resize(&mut self, point: Point, sides: ResizeSides) {
        if sides.right {
            let new_width = point.x - self.x;
            if new_width >= 0.0 {
                self.width = new_width;
            }
        }
        if sides.left {
            let new_width = self.x + self.width - point.x;
            if new_width >= 0.0 {
                self.x = point.x;
                self.width = new_width;
            }
        }
        if sides.bottom {
            let new_height = point.y - self.y;
            if new_height >= 0.0 {
                self.height = new_height;
            }
        }
        if sides.top {
            let new_height = self.y + self.height - point.y;
            if new_height >= 0.0 {
                self.y = point.y;
                self.height = new_height;
            }
        }
    }
}
