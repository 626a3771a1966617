//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEditorBuilder` - Builder pattern for creating editor sessions
//! - Event constructors (`left_down`, `move_to`, `wheel`, ...)
//! - Assertion helpers for float and region comparisons

use framebox::{
    Framebox, Modifiers, Point, PointerButton, PointerEvent, SelectionArea, TransformParts,
    ViewTransform, WheelEvent, point,
};

/// Initialize tracing output for a test, honoring `RUST_LOG`. Safe to call
/// from multiple tests; only the first initialization wins.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// TestEditorBuilder - Builder pattern for creating editor sessions
// ============================================================================

/// Builder for creating editor sessions with a configured view and region.
///
/// # Example
/// ```ignore
/// let editor = TestEditorBuilder::new()
///     .with_scale(2.0)
///     .with_offset(50.0, 50.0)
///     .with_region(10.0, 10.0, 20.0, 20.0)
///     .build();
/// ```
pub struct TestEditorBuilder {
    surface: (u32, u32),
    scale: f32,
    offset: (f32, f32),
    border_size: f32,
    region: Option<(f32, f32, f32, f32)>,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        Self {
            surface: (800, 600),
            scale: 1.0,
            offset: (0.0, 0.0),
            border_size: 5.0,
            region: None,
        }
    }

    pub fn with_surface(mut self, width: u32, height: u32) -> Self {
        self.surface = (width, height);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn with_border_size(mut self, border_size: f32) -> Self {
        self.border_size = border_size;
        self
    }

    pub fn with_region(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.region = Some((x, y, width, height));
        self
    }

    pub fn build(self) -> Framebox {
        let mut editor = Framebox::new(self.surface.0, self.surface.1);
        editor.view = ViewTransform::from_parts(TransformParts {
            scale: self.scale,
            offset_x: self.offset.0,
            offset_y: self.offset.1,
        });
        editor.selection = SelectionArea::new(self.border_size);
        if let Some((x, y, w, h)) = self.region {
            editor.selection.place(x, y, w, h);
        }
        editor
    }
}

/// The standard test fixture: 800x600 surface, identity view, border 5,
/// rectangle at {10,10,20,20}.
pub fn editor_with_region() -> Framebox {
    TestEditorBuilder::new()
        .with_region(10.0, 10.0, 20.0, 20.0)
        .build()
}

// ============================================================================
// Event constructors
// ============================================================================

fn pointer(button: PointerButton, control: bool, x: f32, y: f32) -> PointerEvent {
    PointerEvent {
        on_surface: true,
        button,
        modifiers: Modifiers { control },
        surface_pos: point(x, y),
        screen_pos: point(x, y),
    }
}

/// Left button press at surface position (x, y).
pub fn left_down(x: f32, y: f32) -> PointerEvent {
    pointer(PointerButton::Left, false, x, y)
}

/// Ctrl+left press, the pan chord.
pub fn ctrl_left_down(x: f32, y: f32) -> PointerEvent {
    pointer(PointerButton::Left, true, x, y)
}

/// Middle button press, the other pan chord.
pub fn middle_down(x: f32, y: f32) -> PointerEvent {
    pointer(PointerButton::Middle, false, x, y)
}

/// Pointer move to surface position (x, y).
pub fn move_to(x: f32, y: f32) -> PointerEvent {
    pointer(PointerButton::Left, false, x, y)
}

/// Pointer release at surface position (x, y).
pub fn up(x: f32, y: f32) -> PointerEvent {
    pointer(PointerButton::Left, false, x, y)
}

/// Pointer enter/leave marker event.
pub fn crossing() -> PointerEvent {
    pointer(PointerButton::Left, false, 0.0, 0.0)
}

/// Strip the surface targeting off an event.
pub fn off_surface(mut event: PointerEvent) -> PointerEvent {
    event.on_surface = false;
    event
}

/// Wheel event at surface position (x, y).
pub fn wheel(x: f32, y: f32, delta_y: f32) -> WheelEvent {
    WheelEvent {
        on_surface: true,
        surface_pos: point(x, y),
        delta_y,
    }
}

// ============================================================================
// Assertion helpers
// ============================================================================

pub fn assert_near(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "{what}: expected {expected}, got {actual}"
    );
}

pub fn assert_point_near(actual: Point, expected: Point, what: &str) {
    assert_near(actual.x, expected.x, &format!("{what}.x"));
    assert_near(actual.y, expected.y, &format!("{what}.y"));
}

/// Assert the editor's region record matches (x, y, width, height).
pub fn assert_region(editor: &Framebox, expected: (f32, f32, f32, f32)) {
    let record = editor.region();
    assert_near(record.x, expected.0, "region.x");
    assert_near(record.y, expected.1, "region.y");
    assert_near(record.width, expected.2, "region.width");
    assert_near(record.height, expected.3, "region.height");
}
