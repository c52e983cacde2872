//! Cutting label images out of a rendered frame.
//!
//! After a group has been counter-rotated, its labels are upright on screen.
//! A full-viewport RGBA capture of that state can be cropped with the rects
//! returned for the group to get one image per label.
//!
//! # Pixel Box
//!
//! A rect's edges are rounded to the nearest whole pixel, giving the box
//! `(left, top, right, bottom)` with `right`/`bottom` exclusive. The box is
//! clamped to the frame. A box with no area after clamping yields no image.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use thiserror::Error;

use crate::rect::{IndexedRect, Rect};

/// Errors that can occur while preparing or encoding label crops.
#[derive(Debug, Error)]
pub enum CropError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The rect does not overlap the frame
    #[error("Label rect lies outside the {width}x{height} frame")]
    OutsideFrame { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Integer crop box in frame pixels. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelBox {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

fn clamp_edge(value: f64, max: u32) -> u32 {
    // NaN casts to 0
    value.round().clamp(0.0, max as f64) as u32
}

/// Round and clamp `rect` to a `width` x `height` frame.
///
/// Returns `None` if nothing of the rect lies inside the frame.
pub fn pixel_box(rect: &Rect, width: u32, height: u32) -> Option<PixelBox> {
    let b = PixelBox {
        left: clamp_edge(rect.left, width),
        top: clamp_edge(rect.top, height),
        right: clamp_edge(rect.right, width),
        bottom: clamp_edge(rect.bottom, height),
    };
    (b.right > b.left && b.bottom > b.top).then_some(b)
}

/// Wrap raw RGBA bytes (4 bytes per pixel, row-major) as a frame.
pub fn frame_from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<RgbaImage, CropError> {
    if width == 0 || height == 0 {
        return Err(CropError::InvalidDimensions { width, height });
    }
    let expected = (width as usize) * (height as usize) * 4;
    let actual = pixels.len();
    if actual != expected {
        return Err(CropError::InvalidPixelData { expected, actual });
    }
    RgbaImage::from_raw(width, height, pixels)
        .ok_or(CropError::InvalidPixelData { expected, actual })
}

/// Crop one label out of `frame`.
pub fn crop_label(frame: &RgbaImage, rect: &Rect) -> Option<RgbaImage> {
    let b = pixel_box(rect, frame.width(), frame.height())?;
    Some(image::imageops::crop_imm(frame, b.left, b.top, b.width(), b.height()).to_image())
}

/// Crop every label of a group, keeping its index. Labels entirely outside
/// the frame are dropped.
pub fn crop_labels(frame: &RgbaImage, rects: &[IndexedRect]) -> Vec<(usize, RgbaImage)> {
    rects
        .iter()
        .filter_map(|indexed| crop_label(frame, &indexed.rect).map(|img| (indexed.index, img)))
        .collect()
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CropError> {
    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| CropError::EncodingFailed(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// Crop one label from raw RGBA frame bytes and encode it as PNG.
pub fn crop_label_png(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    rect: &Rect,
) -> Result<Vec<u8>, CropError> {
    let frame = frame_from_rgba(pixels, width, height)?;
    let label = crop_label(&frame, rect).ok_or(CropError::OutsideFrame { width, height })?;
    encode_png(&label)
}
