//! Tracked hardware camera source.
//!
//! Models the tracked-camera runtime as an abstract capability
//! ([`TrackedCameraApi`]) and layers the acquisition state machine on
//! top: a [`TrackedCameraSource`] is either `Live`, polling hardware
//! with sequence-number gating, or `Degraded`, permanently serving a
//! static fallback snapshot.
//!
//! Degradation is decided once, at initialization. Per-frame query
//! failures afterwards are transient: they cost one tick and are
//! retried naturally on the next poll. Recovery from a failed
//! initialization requires recreating the source.

use std::rc::Rc;

use inkcam_pipeline::Dimensions;
use log::{debug, error, warn};

use crate::error::CaptureError;
use crate::source::{FrameSource, Poll};

/// Opaque handle for an acquired video streaming session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHandle(pub u64);

/// Frame geometry reported by the camera runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    /// Frame dimensions in pixels.
    pub dimensions: Dimensions,
    /// Byte length of one frame payload.
    pub buffer_len: usize,
}

/// The tracked-camera runtime capability.
///
/// Mirrors the hardware API surface: every call reports success or a
/// status code, never panics or blocks indefinitely. The split between
/// [`frame_header`](Self::frame_header) (cheap, header-only) and
/// [`read_frame`](Self::read_frame) (full payload copy) is what makes
/// sequence-number gating worthwhile.
pub trait TrackedCameraApi {
    /// Whether a camera is present at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Api`] when the capability query itself
    /// fails.
    fn has_camera(&self, index: u32) -> Result<bool, CaptureError>;

    /// Frame dimensions and payload size for the camera at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Api`] on a failed size query.
    fn frame_size(&self, index: u32) -> Result<FrameSize, CaptureError>;

    /// Acquire the (scarce) video streaming session for `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Api`] when the session cannot be
    /// acquired.
    fn acquire_stream(&self, index: u32) -> Result<StreamHandle, CaptureError>;

    /// Query the current frame's sequence number without copying the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Api`] on a failed header query.
    fn frame_header(&self, stream: StreamHandle) -> Result<u32, CaptureError>;

    /// Copy the current frame payload into `payload`, returning its
    /// sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Api`] on a failed frame fetch.
    fn read_frame(&self, stream: StreamHandle, payload: &mut [u8]) -> Result<u32, CaptureError>;

    /// Release a previously acquired streaming session.
    fn release_stream(&self, stream: StreamHandle);
}

/// Scoped ownership of a streaming session.
///
/// Releases the session exactly once when dropped, on every exit path.
/// A guard only exists after a successful acquisition, so the
/// "release without acquire" case is unrepresentable.
#[derive(Debug)]
struct StreamGuard<A: TrackedCameraApi> {
    api: Rc<A>,
    handle: StreamHandle,
}

impl<A: TrackedCameraApi> Drop for StreamGuard<A> {
    fn drop(&mut self) {
        self.api.release_stream(self.handle);
    }
}

#[derive(Debug)]
enum State<A: TrackedCameraApi> {
    /// Streaming session held; frames polled from hardware.
    Live {
        stream: StreamGuard<A>,
        /// Sequence number of the last delivered frame. `None` until
        /// the first frame, so an initial sequence of zero still
        /// counts as fresh.
        last_sequence: Option<u32>,
        /// Reusable payload buffer, sized once from the size query.
        payload: Vec<u8>,
    },
    /// Initialization failed; serves the fallback snapshot forever.
    Degraded { snapshot: Option<Vec<u8>> },
}

/// Frame source backed by a tracked hardware camera.
pub struct TrackedCameraSource<A: TrackedCameraApi> {
    api: Rc<A>,
    dimensions: Dimensions,
    state: State<A>,
}

impl<A: TrackedCameraApi> TrackedCameraSource<A> {
    /// Initialize the camera at `index`.
    ///
    /// Walks the device-presence, frame-size, and stream-acquisition
    /// ladder. Any failure is logged once and produces a degraded
    /// source reporting `fallback` as its dimensions, so the
    /// presentation surface keeps its existing footprint. The caller
    /// must treat [`FrameSource::is_degraded`] as authoritative.
    pub fn initialize(api: A, index: u32, fallback: Dimensions) -> Self {
        let api = Rc::new(api);
        match Self::acquire(&api, index) {
            Ok((dimensions, stream, buffer_len)) => {
                debug!(
                    "tracked camera {index} live: {}x{}, {buffer_len} byte frames",
                    dimensions.width, dimensions.height,
                );
                Self {
                    api,
                    dimensions,
                    state: State::Live {
                        stream,
                        last_sequence: None,
                        payload: vec![0; buffer_len],
                    },
                }
            }
            Err(err) => {
                error!("tracked camera {index} unavailable, serving fallback: {err}");
                Self {
                    api,
                    dimensions: fallback,
                    state: State::Degraded { snapshot: None },
                }
            }
        }
    }

    fn acquire(
        api: &Rc<A>,
        index: u32,
    ) -> Result<(Dimensions, StreamGuard<A>, usize), CaptureError> {
        if !api.has_camera(index)? {
            return Err(CaptureError::NoCamera { index });
        }
        let size = api.frame_size(index)?;
        // Acquire last: the guard takes over release duty the moment
        // the session exists.
        let handle = api.acquire_stream(index)?;
        let stream = StreamGuard {
            api: Rc::clone(api),
            handle,
        };
        Ok((size.dimensions, stream, size.buffer_len))
    }
}

impl<A: TrackedCameraApi> FrameSource for TrackedCameraSource<A> {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn is_degraded(&self) -> bool {
        matches!(self.state, State::Degraded { .. })
    }

    fn set_fallback(&mut self, snapshot: Vec<u8>) {
        if let State::Degraded { snapshot: slot } = &mut self.state {
            *slot = Some(snapshot);
        }
    }

    fn poll_frame(&mut self) -> Poll<'_> {
        match &mut self.state {
            State::Degraded { snapshot } => snapshot.as_deref().map_or(Poll::Absent, Poll::Frame),
            State::Live {
                stream,
                last_sequence,
                payload,
            } => {
                // Header first: skip the payload copy entirely when the
                // frame has not advanced since the last poll.
                let sequence = match self.api.frame_header(stream.handle) {
                    Ok(sequence) => sequence,
                    Err(err) => {
                        warn!("frame header query failed: {err}");
                        return Poll::Absent;
                    }
                };
                if *last_sequence == Some(sequence) {
                    return Poll::Absent;
                }

                match self.api.read_frame(stream.handle, payload) {
                    Ok(sequence) => {
                        *last_sequence = Some(sequence);
                        Poll::Frame(payload)
                    }
                    Err(err) => {
                        warn!("frame fetch failed: {err}");
                        Poll::Absent
                    }
                }
            }
        }
    }
}
