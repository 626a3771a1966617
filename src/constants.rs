//! Engine-wide constants.
//!
//! Centralizes magic numbers and paint values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_SCALE: f32 = 0.5;

/// Maximum zoom level
pub const MAX_SCALE: f32 = 10.0;

/// Default zoom level
pub const DEFAULT_SCALE: f32 = 1.0;

/// Scale change per unit of wheel delta (wheel-down zooms out)
pub const WHEEL_ZOOM_FACTOR: f32 = -0.01;

// ============================================================================
// Selection
// ============================================================================

/// Default width of the resize border band around the rectangle, in world units
pub const DEFAULT_BORDER_SIZE: f32 = 15.0;

/// Minimum allowed border band width
pub const MIN_BORDER_SIZE: f32 = 1.0;

// ============================================================================
// Painting
// ============================================================================

/// Checkerboard tile edge length in world units
pub const CHECKER_TILE_SIZE: f32 = 10.0;

/// Light checkerboard tile color, rgba (white at 0.80 alpha)
pub const CHECKER_LIGHT: (u8, u8, u8, u8) = (255, 255, 255, 204);

/// Dark checkerboard tile color, rgba (black at 0.05 alpha)
pub const CHECKER_DARK: (u8, u8, u8, u8) = (0, 0, 0, 13);

/// Translucent fill for the selection rectangle, rgba
pub const SELECTION_FILL: (u8, u8, u8, u8) = (66, 133, 244, 64);

/// Dimming overlay outside the selection in clipping mode, rgba
pub const CLIP_DIM: (u8, u8, u8, u8) = (0, 0, 0, 128);
