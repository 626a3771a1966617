//! Frame raster loading and conversion.
//!
//! A [`Frame`] is the paintable representation of one decoded video frame.
//! Decoding is the engine's only asynchronous boundary: hosts run
//! [`Frame::load`] (or their own decoder feeding [`Frame::from_image`]) off
//! the event-loop thread and hand the finished frame to
//! [`crate::Framebox::set_frame`].

use image::RgbaImage;
use std::path::Path;
use thiserror::Error;
use tiny_skia::{IntSize, Pixmap, PixmapRef};
use tracing::debug;

/// Errors that can occur while producing a frame raster.
#[derive(Error, Debug)]
pub enum FrameError {
    /// Image decoding failed (covers I/O underneath)
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image has a zero dimension
    #[error("frame has zero dimensions")]
    EmptyFrame,

    /// The raster could not be converted to a paintable pixmap
    #[error("raster conversion failed")]
    Raster,
}

/// Result type alias for frame operations
pub type FrameResult<T> = Result<T, FrameError>;

/// One decoded frame, ready to composite.
#[derive(Clone)]
pub struct Frame {
    pixmap: Pixmap,
}

impl Frame {
    /// Wrap a decoded RGBA image.
    ///
    /// Pixel data is taken as premultiplied; decoded video frames are
    /// opaque, where the two representations coincide.
    pub fn from_image(image: RgbaImage) -> FrameResult<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyFrame);
        }
        let size = IntSize::from_wh(width, height).ok_or(FrameError::Raster)?;
        let pixmap = Pixmap::from_vec(image.into_raw(), size).ok_or(FrameError::Raster)?;
        Ok(Self { pixmap })
    }

    /// Decode a raster file from disk.
    pub fn load(path: &Path) -> FrameResult<Self> {
        let image = image::open(path)?.to_rgba8();
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "frame decoded"
        );
        Self::from_image(image)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Borrow the raster for compositing.
    pub fn pixmap(&self) -> PixmapRef<'_> {
        self.pixmap.as_ref()
    }
}
