//! Masked compositing of one single-channel buffer onto another.
//!
//! Mirrors OpenCV's masked `copyTo`: destination pixels are overwritten
//! by source pixels wherever the mask is non-zero, and left untouched
//! where the mask is zero.

use image::GrayImage;

/// Copy `src` onto `dst` wherever `mask` is non-zero.
///
/// The caller guarantees all three buffers share the pipeline
/// dimensions.
pub fn masked_copy(src: &GrayImage, mask: &GrayImage, dst: &mut GrayImage) {
    for ((s, m), d) in src.pixels().zip(mask.pixels()).zip(dst.pixels_mut()) {
        if m.0[0] != 0 {
            d.0[0] = s.0[0];
        }
    }
}
