//! The presentation surface contract.
//!
//! The viewer writes finished pixel buffers into a surface and reads
//! back whatever it currently shows when capturing a fallback
//! snapshot. How the surface actually displays pixels (texture upload,
//! window blit, ...) is outside the core.

use crate::orientation::Orientation;

/// Where finished frames land.
pub trait PresentationSurface {
    /// Upload a raw RGBA buffer for display.
    fn set_pixels(&mut self, rgba: &[u8]);

    /// The pixels currently displayed, if any frame has been uploaded
    /// yet. Used once, to capture the degraded-mode fallback snapshot.
    fn pixels(&self) -> Option<Vec<u8>>;

    /// Apply a display orientation.
    fn set_orientation(&mut self, orientation: Orientation);
}
