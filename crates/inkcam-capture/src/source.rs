//! The frame source abstraction the orchestration loop polls.

use inkcam_pipeline::Dimensions;

/// Outcome of polling a source for one tick.
///
/// `Absent` covers every "nothing to draw" condition: no new frame
/// since the last poll (stale sequence number), a transient query
/// failure, or a degraded source with no fallback snapshot. The caller
/// reacts identically in all three cases: skip the tick and leave the
/// previous frame on the presentation surface.
#[derive(Debug, PartialEq, Eq)]
pub enum Poll<'a> {
    /// A frame to draw this tick. Borrowed from the source's reusable
    /// buffer; valid until the next poll.
    Frame(&'a [u8]),
    /// Nothing to draw this tick.
    Absent,
}

impl Poll<'_> {
    /// Returns `true` for [`Poll::Frame`].
    #[must_use]
    pub const fn is_frame(&self) -> bool {
        matches!(self, Self::Frame(_))
    }
}

/// A producer of raw RGBA frames, polled once per display tick.
///
/// Implemented by [`TrackedCameraSource`](crate::TrackedCameraSource)
/// for tracked hardware cameras and
/// [`WebcamSource`](crate::WebcamSource) for generic capture devices.
pub trait FrameSource {
    /// Frame dimensions, fixed for the source's lifetime.
    ///
    /// A degraded source reports the fallback dimensions it was
    /// initialized with, so the presentation surface keeps its
    /// existing footprint.
    fn dimensions(&self) -> Dimensions;

    /// Whether the source has permanently fallen back to a static
    /// buffer. Sticky: once degraded, a source never recovers within
    /// its lifetime.
    fn is_degraded(&self) -> bool;

    /// Install the static fallback buffer served while degraded.
    ///
    /// Captured once by the orchestrator, from whatever the
    /// presentation surface held at the moment degradation was first
    /// observed. A no-op on a live source.
    fn set_fallback(&mut self, snapshot: Vec<u8>);

    /// Poll for a frame. Never blocks; any failure maps to
    /// [`Poll::Absent`].
    fn poll_frame(&mut self) -> Poll<'_>;
}
