//! The canvas paint pass.
//!
//! Paint order: clear, world-aligned checkerboard over the visible world
//! viewport, the frame raster at its native placement, then the selection
//! overlay. Everything except the clear goes through the view transform so
//! drawing stays in world coordinates.
//!
//! This is a hot path - it runs once per dirty display refresh and is
//! O(viewport area).

use crate::constants::{CHECKER_DARK, CHECKER_LIGHT, CHECKER_TILE_SIZE, CLIP_DIM, SELECTION_FILL};
use crate::frame::Frame;
use crate::selection::SelectionArea;
use crate::transform::ViewTransform;
use tiny_skia::{
    FillRule, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Transform,
};

/// How the selection rectangle is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Translucent fill over the rectangle
    #[default]
    Standard,
    /// Dimming overlay outside the rectangle; the region itself shows the
    /// undimmed frame through the clip
    Clipping,
}

/// Everything one paint pass reads.
pub struct Scene<'a> {
    pub view: &'a ViewTransform,
    pub frame: Option<&'a Frame>,
    pub selection: &'a SelectionArea,
    pub mode: RenderMode,
}

/// The visible viewport expressed in world coordinates.
struct WorldViewport {
    start_x: f32,
    start_y: f32,
    width: f32,
    height: f32,
}

fn world_viewport(view: &ViewTransform, surface: &Pixmap) -> WorldViewport {
    let inverse_scale = if view.scale() > 0.0 { 1.0 / view.scale() } else { 1.0 };
    let offset = view.offset();
    WorldViewport {
        start_x: -offset.x * inverse_scale,
        start_y: -offset.y * inverse_scale,
        width: surface.width() as f32 * inverse_scale,
        height: surface.height() as f32 * inverse_scale,
    }
}

fn world_transform(view: &ViewTransform) -> Transform {
    let offset = view.offset();
    Transform::from_row(view.scale(), 0.0, 0.0, view.scale(), offset.x, offset.y)
}

fn color_paint((r, g, b, a): (u8, u8, u8, u8)) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint
}

/// Paint the full scene into the surface.
pub fn paint(surface: &mut Pixmap, scene: &Scene<'_>) {
    surface.fill(tiny_skia::Color::TRANSPARENT);

    let ts = world_transform(scene.view);
    let viewport = world_viewport(scene.view, surface);

    draw_checkerboard(surface, &viewport, ts);

    if let Some(frame) = scene.frame {
        surface.draw_pixmap(0, 0, frame.pixmap(), &PixmapPaint::default(), ts, None);
    }

    if scene.selection.is_defined() {
        match scene.mode {
            RenderMode::Standard => draw_selection_fill(surface, scene.selection, ts),
            RenderMode::Clipping => draw_clip_dim(surface, scene.selection, ts),
        }
    }
}

/// Tile the visible world viewport with a 10-unit checkerboard.
///
/// The tile origin snaps to the 10-unit grid nearest the viewport's
/// top-left; tile color alternates by the parity of `(x + y) / 10`.
fn draw_checkerboard(surface: &mut Pixmap, viewport: &WorldViewport, ts: Transform) {
    let tile = CHECKER_TILE_SIZE;
    let x0 = (viewport.start_x * 0.1).round() * tile;
    let y0 = (viewport.start_y * 0.1).round() * tile;

    let light = color_paint(CHECKER_LIGHT);
    let dark = color_paint(CHECKER_DARK);

    let cols = (viewport.width / tile) as i32;
    let rows = (viewport.height / tile) as i32;

    for i in 0..=rows {
        for j in 0..=cols {
            let x = x0 + j as f32 * tile;
            let y = y0 + i as f32 * tile;
            let odd = (((x + y) * 0.1) as i64) % 2 != 0;
            if let Some(rect) = Rect::from_xywh(x, y, tile, tile) {
                surface.fill_rect(rect, if odd { &light } else { &dark }, ts, None);
            }
        }
    }
}

fn selection_rect(selection: &SelectionArea) -> Option<Rect> {
    Rect::from_xywh(
        selection.x_min(),
        selection.y_min(),
        selection.x_max() - selection.x_min(),
        selection.y_max() - selection.y_min(),
    )
}

fn draw_selection_fill(surface: &mut Pixmap, selection: &SelectionArea, ts: Transform) {
    let Some(rect) = selection_rect(selection) else {
        return;
    };
    surface.fill_rect(rect, &color_paint(SELECTION_FILL), ts, None);
}

/// Dim everything outside the selection through an inverted clip mask.
fn draw_clip_dim(surface: &mut Pixmap, selection: &SelectionArea, ts: Transform) {
    let Some(rect) = selection_rect(selection) else {
        return;
    };
    let Some(mut mask) = Mask::new(surface.width(), surface.height()) else {
        return;
    };

    let path = PathBuilder::from_rect(rect);
    mask.fill_path(&path, FillRule::Winding, false, ts);
    mask.invert();

    let Some(full) = Rect::from_xywh(0.0, 0.0, surface.width() as f32, surface.height() as f32)
    else {
        return;
    };
    surface.fill_rect(full, &color_paint(CLIP_DIM), Transform::identity(), Some(&mask));
}
