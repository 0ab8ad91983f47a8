//! Shared types for the inkcam stylization pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// intermediate raster data without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbaImage` so downstream crates can reference the
/// stylized output without depending on `image` directly.
pub use image::RgbaImage;

/// Frame dimensions in pixels.
///
/// Established once per pipeline configuration, from the capture
/// device. Every working buffer in the pipeline shares these exact
/// dimensions for the pipeline's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either side is zero.
    ///
    /// Degenerate dimensions must short-circuit pipeline construction
    /// entirely; no buffers may be allocated for them.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels in a frame of these dimensions.
    #[must_use]
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte length of an RGBA frame of these dimensions.
    #[must_use]
    pub const fn rgba_len(self) -> usize {
        self.pixel_count() * 4
    }
}

/// Tri-state classification of a grayscale intensity.
///
/// Derived per pixel, per frame; never persisted across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Intensity below [`Shade::DARK_LIMIT`]. Rendered as solid black.
    Dark,
    /// Intensity in `DARK_LIMIT..LIGHT_FLOOR`. Transparent in the
    /// opacity mask so the background pattern shows through.
    Mid,
    /// Intensity at or above [`Shade::LIGHT_FLOOR`]. Rendered as
    /// solid white.
    Light,
}

impl Shade {
    /// Intensities below this value classify as [`Shade::Dark`].
    pub const DARK_LIMIT: u8 = 70;

    /// Intensities at or above this value classify as [`Shade::Light`].
    pub const LIGHT_FLOOR: u8 = 120;

    /// Classify a grayscale intensity.
    #[must_use]
    pub const fn classify(value: u8) -> Self {
        if value < Self::DARK_LIMIT {
            Self::Dark
        } else if value < Self::LIGHT_FLOOR {
            Self::Mid
        } else {
            Self::Light
        }
    }

    /// The flat quantized value for this shade.
    #[must_use]
    pub const fn quantized(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Mid => 100,
            Self::Light => 255,
        }
    }

    /// Whether this shade overwrites the background pattern when
    /// composited. Only [`Shade::Mid`] is transparent.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        !matches!(self, Self::Mid)
    }
}

/// Configuration for the stylization pipeline.
///
/// All parameters default to the values of the comic filter this
/// pipeline implements. They exist as knobs for experimentation, not
/// as per-frame state: changing any of them requires reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StylizerConfig {
    /// Gaussian blur sigma applied before edge detection.
    ///
    /// The default is the OpenCV-equivalent sigma for a 3x3 kernel
    /// with automatic sigma: `0.3 * ((3 - 1) * 0.5 - 1) + 0.8`.
    pub blur_sigma: f32,

    /// Canny edge detector low threshold.
    pub canny_low: f32,

    /// Canny edge detector high threshold.
    pub canny_high: f32,

    /// Vertical spacing between diagonal background stripes, in pixels.
    pub stripe_spacing: u32,

    /// Stripe coverage as a multiple of the buffer height. Values above
    /// 1.0 extend stripes past the bottom edge so the 45-degree lines
    /// still reach the lower-right corner.
    pub stripe_overscan: f32,
}

impl StylizerConfig {
    /// Default Gaussian blur sigma (3x3 kernel equivalent).
    pub const DEFAULT_BLUR_SIGMA: f32 = 0.8;
    /// Default Canny low threshold.
    pub const DEFAULT_CANNY_LOW: f32 = 20.0;
    /// Default Canny high threshold.
    pub const DEFAULT_CANNY_HIGH: f32 = 120.0;
    /// Default stripe spacing in pixels.
    pub const DEFAULT_STRIPE_SPACING: u32 = 4;
    /// Default stripe overscan factor.
    pub const DEFAULT_STRIPE_OVERSCAN: f32 = 2.5;
}

impl Default for StylizerConfig {
    fn default() -> Self {
        Self {
            blur_sigma: Self::DEFAULT_BLUR_SIGMA,
            canny_low: Self::DEFAULT_CANNY_LOW,
            canny_high: Self::DEFAULT_CANNY_HIGH,
            stripe_spacing: Self::DEFAULT_STRIPE_SPACING,
            stripe_overscan: Self::DEFAULT_STRIPE_OVERSCAN,
        }
    }
}

/// Errors that can occur during pipeline configuration or processing.
///
/// These are programming errors, not runtime conditions: a correctly
/// wired caller never produces them. They are surfaced as explicit
/// errors rather than silently skipped so misconfiguration is
/// diagnosable.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The requested dimensions had a zero side; no buffers were
    /// allocated and the pipeline must not be used.
    #[error("cannot configure pipeline with zero dimensions ({width}x{height})")]
    ZeroDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// An input frame's byte length did not match the configured
    /// dimensions.
    #[error("frame size mismatch: expected {expected} bytes, got {actual}")]
    FrameSizeMismatch {
        /// `width * height * 4` for the configured dimensions.
        expected: usize,
        /// Byte length of the frame actually supplied.
        actual: usize,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- Dimensions tests ---

    #[test]
    fn dimensions_degenerate_when_either_side_zero() {
        assert!(Dimensions::new(0, 480).is_degenerate());
        assert!(Dimensions::new(640, 0).is_degenerate());
        assert!(Dimensions::new(0, 0).is_degenerate());
        assert!(!Dimensions::new(640, 480).is_degenerate());
    }

    #[test]
    fn dimensions_rgba_len() {
        assert_eq!(Dimensions::new(612, 460).rgba_len(), 612 * 460 * 4);
        assert_eq!(Dimensions::new(0, 460).rgba_len(), 0);
    }

    #[test]
    fn dimensions_serde_round_trip() {
        let d = Dimensions::new(612, 460);
        let json = serde_json::to_string(&d).unwrap();
        let deserialized: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(d, deserialized);
    }

    // --- Shade tests ---

    #[test]
    fn classify_boundaries() {
        // DARK iff v < 70, MID iff 70 <= v < 120, LIGHT iff v >= 120.
        assert_eq!(Shade::classify(0), Shade::Dark);
        assert_eq!(Shade::classify(69), Shade::Dark);
        assert_eq!(Shade::classify(70), Shade::Mid);
        assert_eq!(Shade::classify(119), Shade::Mid);
        assert_eq!(Shade::classify(120), Shade::Light);
        assert_eq!(Shade::classify(255), Shade::Light);
    }

    #[test]
    fn classify_exhaustive_against_definition() {
        for v in 0..=255_u8 {
            let shade = Shade::classify(v);
            match shade {
                Shade::Dark => assert!(v < 70, "value {v} misclassified as Dark"),
                Shade::Mid => assert!((70..120).contains(&v), "value {v} misclassified as Mid"),
                Shade::Light => assert!(v >= 120, "value {v} misclassified as Light"),
            }
            // Opacity is 0 iff MID, else 1.
            assert_eq!(shade.is_opaque(), !matches!(shade, Shade::Mid));
        }
    }

    #[test]
    fn quantized_values() {
        assert_eq!(Shade::Dark.quantized(), 0);
        assert_eq!(Shade::Mid.quantized(), 100);
        assert_eq!(Shade::Light.quantized(), 255);
    }

    // --- StylizerConfig tests ---

    #[test]
    fn config_defaults_match_filter_constants() {
        let config = StylizerConfig::default();
        assert!((config.blur_sigma - 0.8).abs() < f32::EPSILON);
        assert!((config.canny_low - 20.0).abs() < f32::EPSILON);
        assert!((config.canny_high - 120.0).abs() < f32::EPSILON);
        assert_eq!(config.stripe_spacing, 4);
        assert!((config.stripe_overscan - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = StylizerConfig {
            blur_sigma: 1.2,
            canny_low: 10.0,
            canny_high: 90.0,
            stripe_spacing: 6,
            stripe_overscan: 2.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: StylizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    // --- PipelineError tests ---

    #[test]
    fn zero_dimensions_display() {
        let err = PipelineError::ZeroDimensions {
            width: 0,
            height: 480,
        };
        assert_eq!(
            err.to_string(),
            "cannot configure pipeline with zero dimensions (0x480)",
        );
    }

    #[test]
    fn frame_size_mismatch_display() {
        let err = PipelineError::FrameSizeMismatch {
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "frame size mismatch: expected 16 bytes, got 12",
        );
    }
}
