//! inkcam-display: per-tick orchestration and presentation contracts.
//!
//! The [`Viewer`] runs once per display refresh, deciding whether the
//! tick draws a stylized frame, a raw frame, a fallback snapshot, or
//! nothing. The [`PresentationSurface`] trait is the seam to whatever
//! actually puts pixels on screen.

pub mod orientation;
pub mod surface;
pub mod viewer;

pub use orientation::{Orientation, effective_orientation};
pub use surface::PresentationSurface;
pub use viewer::Viewer;
