//! RGBA/grayscale conversions into caller-held buffers.
//!
//! Both directions run every frame, so they write into pre-allocated
//! images instead of returning fresh ones. The standard luminance
//! formula is used for RGB-to-gray: `0.299*R + 0.587*G + 0.114*B`.

use image::{GrayImage, RgbaImage};

/// Convert a raw RGBA byte buffer to single-channel luma.
///
/// The caller guarantees `rgba.len() == out.len() * 4`; the stylizer
/// validates frame sizes before reaching this point.
pub fn rgba_to_luma(rgba: &[u8], out: &mut GrayImage) {
    for (pixel, chunk) in out.pixels_mut().zip(rgba.chunks_exact(4)) {
        pixel.0[0] = luma(chunk[0], chunk[1], chunk[2]);
    }
}

/// Expand a single-channel image to RGBA with full alpha.
pub fn luma_to_rgba(gray: &GrayImage, out: &mut RgbaImage) {
    for (src, dst) in gray.pixels().zip(out.pixels_mut()) {
        let v = src.0[0];
        dst.0 = [v, v, v, 255];
    }
}

/// Weighted luminance of one RGB pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    y.round().min(255.0) as u8
}
