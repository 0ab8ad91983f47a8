//! inkcam-capture: frame acquisition for the inkcam stylizer.
//!
//! Two [`FrameSource`] implementations feed the pipeline:
//!
//! - [`TrackedCameraSource`]: a tracked hardware camera polled through
//!   an abstract runtime capability, with sequence-number gating and a
//!   sticky degraded mode that serves a static fallback snapshot.
//! - [`WebcamSource`]: any generic capture device that exposes a
//!   "new frame this tick" signal.
//!
//! Sources are single-threaded and tick-driven: the orchestration loop
//! polls once per display refresh and no call blocks.

pub mod error;
pub mod source;
pub mod tracked;
pub mod webcam;

pub use error::CaptureError;
pub use source::{FrameSource, Poll};
pub use tracked::{FrameSize, StreamHandle, TrackedCameraApi, TrackedCameraSource};
pub use webcam::{CaptureDevice, WebcamSource};
