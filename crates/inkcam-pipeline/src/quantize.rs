//! Tri-level quantization of the grayscale buffer.
//!
//! Each pixel is classified as dark, mid, or light and replaced with a
//! flat value (0, 100, 255). The same pass writes the opacity mask:
//! mid-tone pixels get mask 0 so the striped background pattern shows
//! through when composited; dark and light pixels get mask 1 and
//! overwrite it.

use image::GrayImage;

use crate::types::Shade;

/// Quantize `gray` in place to three flat levels, writing the opacity
/// mask alongside.
///
/// The caller guarantees both buffers share the pipeline dimensions.
pub fn tri_level(gray: &mut GrayImage, mask: &mut GrayImage) {
    for (pixel, mask_pixel) in gray.pixels_mut().zip(mask.pixels_mut()) {
        let shade = Shade::classify(pixel.0[0]);
        pixel.0[0] = shade.quantized();
        mask_pixel.0[0] = u8::from(shade.is_opaque());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_to_three_flat_levels() {
        let mut gray = GrayImage::new(6, 1);
        for (x, v) in [0_u8, 69, 70, 119, 120, 255].into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            gray.put_pixel(x as u32, 0, image::Luma([v]));
        }
        let mut mask = GrayImage::new(6, 1);

        tri_level(&mut gray, &mut mask);

        let values: Vec<u8> = gray.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values, vec![0, 0, 100, 100, 255, 255]);
        let opacity: Vec<u8> = mask.pixels().map(|p| p.0[0]).collect();
        assert_eq!(opacity, vec![1, 1, 0, 0, 1, 1]);
    }

    #[test]
    fn mask_is_transparent_only_for_mid_tones() {
        let mut gray = GrayImage::from_fn(16, 16, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            let v = (x * 16 + y) as u8;
            image::Luma([v])
        });
        let original = gray.clone();
        let mut mask = GrayImage::new(16, 16);

        tri_level(&mut gray, &mut mask);

        for (src, m) in original.pixels().zip(mask.pixels()) {
            let expected = u8::from(Shade::classify(src.0[0]).is_opaque());
            assert_eq!(m.0[0], expected);
        }
    }

    #[test]
    fn repeated_quantization_is_stable() {
        // Quantized values re-classify to the same shade, so a second
        // pass is a no-op.
        let mut gray = GrayImage::from_fn(8, 8, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            let v = (x * 32 + y * 4) as u8;
            image::Luma([v])
        });
        let mut mask = GrayImage::new(8, 8);
        tri_level(&mut gray, &mut mask);
        let once = (gray.clone(), mask.clone());
        tri_level(&mut gray, &mut mask);
        assert_eq!(once, (gray, mask));
    }
}
