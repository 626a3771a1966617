//! View transform tests: round trips, zoom clamping, pivot invariance,
//! content fitting.

use crate::helpers::{assert_near, assert_point_near};
use framebox::{TransformParts, ViewTransform, point};

fn transform(scale: f32, offset_x: f32, offset_y: f32) -> ViewTransform {
    ViewTransform::from_parts(TransformParts { scale, offset_x, offset_y })
}

#[test]
fn default_is_identity_like() {
    let view = ViewTransform::new();
    assert_eq!(view.scale(), 1.0);
    assert_point_near(view.to_world(point(17.0, -3.0)), point(17.0, -3.0), "identity");
}

#[test]
fn view_world_round_trip() {
    let view = transform(2.5, 37.0, -12.0);
    for p in [point(0.0, 0.0), point(123.0, 456.0), point(-40.0, 7.5)] {
        assert_point_near(view.to_view(view.to_world(p)), p, "round trip");
    }
}

#[test]
fn pan_replaces_offset_and_preserves_scale() {
    let mut view = transform(3.0, 5.0, 5.0);
    view.pan(point(-20.0, 40.0));
    assert_eq!(view.scale(), 3.0);
    assert_point_near(view.offset(), point(-20.0, 40.0), "offset");
}

#[test]
fn zoom_scenario_doubles_scale_about_origin() {
    let mut view = ViewTransform::new();
    view.zoom(point(0.0, 0.0), -100.0);
    assert_eq!(view.scale(), 2.0);
    // Pivot (0,0) maps to itself before and after
    assert_point_near(view.to_view(point(0.0, 0.0)), point(0.0, 0.0), "pivot");
}

#[test]
fn zoom_clamps_to_scale_bounds() {
    let mut view = ViewTransform::new();
    for _ in 0..50 {
        view.zoom(point(100.0, 100.0), -1000.0);
    }
    assert_eq!(view.scale(), 10.0);

    for _ in 0..50 {
        view.zoom(point(100.0, 100.0), 1000.0);
    }
    assert_eq!(view.scale(), 0.5);
}

#[test]
fn zoom_keeps_world_point_under_pivot() {
    let mut view = transform(1.7, 13.0, 7.0);
    let pivot = point(120.0, 80.0);
    let world_before = view.to_world(pivot);

    view.zoom(pivot, -57.0);
    assert_point_near(view.to_view(world_before), pivot, "pivot invariance");

    view.zoom(pivot, 33.0);
    assert_point_near(view.to_view(world_before), pivot, "pivot invariance after zoom out");
}

#[test]
fn degenerate_scale_falls_back_to_unit_inverse() {
    let view = transform(0.0, 10.0, 20.0);
    assert_point_near(view.to_world(point(15.0, 25.0)), point(5.0, 5.0), "fallback inverse");

    // Zooming out of the degenerate state treats the previous scale as 1
    let mut view = transform(0.0, 0.0, 0.0);
    view.zoom(point(0.0, 0.0), -100.0);
    assert_eq!(view.scale(), 2.0);
}

#[test]
fn parts_round_trip() {
    let parts = TransformParts { scale: 4.2, offset_x: -3.0, offset_y: 9.0 };
    assert_eq!(ViewTransform::from_parts(parts).parts(), parts);
}

// ============================================================================
// fit_to_content
// ============================================================================

#[test]
fn fit_enlarges_small_content_to_half_viewport() {
    let mut view = ViewTransform::new();
    view.fit_to_content(100.0, 50.0, 400.0, 300.0);
    // Width axis wins: 400/(2*100) = 2 vs 300/(2*50) = 3
    assert_eq!(view.scale(), 2.0);
    assert_point_near(view.offset(), point(100.0, 100.0), "centered offset");
}

#[test]
fn fit_keeps_large_content_at_native_scale() {
    let mut view = ViewTransform::new();
    view.fit_to_content(2000.0, 1000.0, 800.0, 600.0);
    assert_eq!(view.scale(), 1.0);
    assert_point_near(view.offset(), point(-600.0, -200.0), "centered offset");
}

#[test]
fn fit_clamps_to_max_scale() {
    let mut view = ViewTransform::new();
    view.fit_to_content(10.0, 10.0, 1000.0, 1000.0);
    assert_eq!(view.scale(), 10.0);
    assert_point_near(view.offset(), point(450.0, 450.0), "centered offset");
}

#[test]
fn fit_ignores_zero_sized_content() {
    let mut view = transform(2.0, 3.0, 4.0);
    view.fit_to_content(0.0, 100.0, 800.0, 600.0);
    assert_eq!(view.scale(), 2.0);
    assert_near(view.offset().x, 3.0, "offset unchanged");
}
