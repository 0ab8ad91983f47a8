//! Canny edge detection and in-place edge map inversion.
//!
//! Wraps [`imageproc::edges::canny`] to detect edges in the blurred
//! grayscale image. Returns a binary image where white pixels (255)
//! are edges and black pixels (0) are background.
//!
//! The stylizer draws the edges as black ink lines: the edge map is
//! first copied into the compositing mask, then inverted in place so
//! edge pixels become 0 (black) and composite over everything else.

use image::GrayImage;

/// Minimum allowed Canny threshold.
///
/// A low threshold of zero causes every pixel with any gradient to be
/// treated as a potential edge, producing an extremely dense edge map.
pub const MIN_THRESHOLD: f32 = 1.0;
const _: () = assert!(MIN_THRESHOLD > 0.0);

/// Detect edges using the Canny algorithm.
///
/// Returns a binary image: 255 for edge pixels, 0 for non-edge.
///
/// Both thresholds are clamped to a minimum of [`MIN_THRESHOLD`] and
/// `low_threshold` is clamped to be at most `high_threshold`.
#[must_use = "returns the binary edge map"]
pub fn canny(image: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    let high = high_threshold.max(MIN_THRESHOLD);
    let low = low_threshold.max(MIN_THRESHOLD).min(high);
    imageproc::edges::canny(image, low, high)
}

/// Invert a binary edge map in place (bitwise NOT).
///
/// Swaps edge pixels (255 -> 0) and background pixels (0 -> 255).
/// Runs every frame, so it mutates the existing buffer rather than
/// allocating a new one.
pub fn invert_in_place(edges: &mut GrayImage) {
    for pixel in edges.pixels_mut() {
        pixel.0[0] = !pixel.0[0];
    }
}
