//! Diagonal-stripe background pattern synthesis.
//!
//! The comic look composites mid-tone regions against a fixed pattern
//! of 45-degree stripes. The pattern is drawn once per configuration
//! and never changes for the pipeline's lifetime.

use image::{GrayImage, Luma};
use imageproc::drawing::draw_line_segment_mut;

use crate::types::{Dimensions, StylizerConfig};

/// Synthesize the striped background pattern.
///
/// The buffer is filled with white (255), then diagonal lines of value
/// 0 are drawn from `(0, i)` to `(width, i - width)` for `i` stepping
/// by `stripe_spacing` up to `height * stripe_overscan`. The overscan
/// lets stripes that start below the bottom edge still cross the
/// visible area on their way up to the right.
///
/// Deterministic: identical dimensions and config produce an identical
/// pattern.
#[must_use = "returns the synthesized background pattern"]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn striped(dimensions: Dimensions, config: &StylizerConfig) -> GrayImage {
    let mut pattern = GrayImage::from_pixel(dimensions.width, dimensions.height, Luma([255]));

    let limit = (dimensions.height as f32 * config.stripe_overscan) as u32;
    let width = dimensions.width as f32;
    let spacing = config.stripe_spacing.max(1) as usize;
    for i in (0..limit).step_by(spacing) {
        let y = i as f32;
        draw_line_segment_mut(&mut pattern, (0.0, y), (width, y - width), Luma([0]));
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_deterministic_for_fixed_dimensions() {
        let dims = Dimensions::new(32, 24);
        let config = StylizerConfig::default();
        let first = striped(dims, &config);
        let second = striped(dims, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn pattern_contains_both_stripe_and_background_values() {
        let pattern = striped(Dimensions::new(32, 32), &StylizerConfig::default());
        let stripe_pixels = pattern.pixels().filter(|p| p.0[0] == 0).count();
        let background_pixels = pattern.pixels().filter(|p| p.0[0] == 255).count();
        assert!(stripe_pixels > 0, "expected stripe pixels in pattern");
        assert!(
            background_pixels > 0,
            "expected background pixels in pattern"
        );
        assert_eq!(stripe_pixels + background_pixels, 32 * 32);
    }

    #[test]
    fn stripes_run_diagonally() {
        // Along a 45-degree stripe starting at (0, i), the pixel at
        // (d, i - d) is on the same line.
        let pattern = striped(Dimensions::new(16, 16), &StylizerConfig::default());
        // Stripe starting at i = 8.
        assert_eq!(pattern.get_pixel(0, 8).0[0], 0);
        assert_eq!(pattern.get_pixel(4, 4).0[0], 0);
        assert_eq!(pattern.get_pixel(8, 0).0[0], 0);
    }

    #[test]
    fn single_row_pattern_marks_only_stripe_origins() {
        // For a 4x1 buffer only the stripe starting at i = 0 touches
        // the visible row, at column 0.
        let pattern = striped(Dimensions::new(4, 1), &StylizerConfig::default());
        assert_eq!(pattern.get_pixel(0, 0).0[0], 0);
        assert_eq!(pattern.get_pixel(1, 0).0[0], 255);
        assert_eq!(pattern.get_pixel(2, 0).0[0], 255);
        assert_eq!(pattern.get_pixel(3, 0).0[0], 255);
    }

    #[test]
    fn overscan_extends_stripe_coverage() {
        let dims = Dimensions::new(8, 32);
        let config = StylizerConfig::default();
        let no_overscan = StylizerConfig {
            stripe_overscan: 1.0,
            ..config
        };
        let full = striped(dims, &config);
        let short = striped(dims, &no_overscan);
        let full_stripes = full.pixels().filter(|p| p.0[0] == 0).count();
        let short_stripes = short.pixels().filter(|p| p.0[0] == 0).count();
        assert!(
            full_stripes > short_stripes,
            "expected overscan to add stripe pixels ({full_stripes} vs {short_stripes})",
        );
    }
}
