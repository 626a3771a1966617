//! Core types for the framebox engine.
//!
//! This module defines the geometry primitives and the boundary types the
//! engine exchanges with its host: hit classification results for cursor
//! styling and the plain numeric region record handed to persistence.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A 2D point, used in both view (surface pixel) and world (frame content)
/// coordinates. Callers track which space a value is in; the engine does not
/// tag it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

// ============================================================================
// Hit Classification
// ============================================================================

/// Which part of the selection border a point falls on.
///
/// Corner values take priority over edge values: a point inside both the
/// left and top margin bands classifies as `TopLeft`, never `Left` or `Top`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderSide {
    #[default]
    None,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

/// The set of rectangle edges affected by a resize gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeSides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl ResizeSides {
    /// Returns true if at least one edge is active.
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

impl From<BorderSide> for ResizeSides {
    fn from(side: BorderSide) -> Self {
        use BorderSide::*;
        Self {
            top: matches!(side, Top | TopRight | TopLeft),
            right: matches!(side, Right | TopRight | BottomRight),
            bottom: matches!(side, Bottom | BottomRight | BottomLeft),
            left: matches!(side, Left | TopLeft | BottomLeft),
        }
    }
}

/// Result of classifying a world-space point against the selection
/// rectangle, also reported to the host as hover feedback for cursor
/// styling.
///
/// `is_inside` and `is_outside` are mutually exclusive; a border hit sets
/// neither and carries the side in `border_side`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionHit {
    pub is_inside: bool,
    pub is_outside: bool,
    pub border_side: BorderSide,
}

impl RegionHit {
    /// A point beyond the outer margin box (or an undefined rectangle).
    pub fn outside() -> Self {
        Self {
            is_inside: false,
            is_outside: true,
            border_side: BorderSide::None,
        }
    }

    /// A point within the rectangle bounds, inclusive.
    pub fn inside() -> Self {
        Self {
            is_inside: true,
            is_outside: false,
            border_side: BorderSide::None,
        }
    }

    /// A point within the border margin band.
    pub fn border(side: BorderSide) -> Self {
        Self {
            is_inside: false,
            is_outside: false,
            border_side: side,
        }
    }
}

// ============================================================================
// Persistence Boundary
// ============================================================================

/// Finalized rectangle geometry in world coordinates, as consumed by the
/// external persistence layer. Readable at any time via
/// [`crate::Framebox::region`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
