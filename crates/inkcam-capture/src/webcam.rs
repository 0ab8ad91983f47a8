//! Generic webcam source.
//!
//! Alternate [`FrameSource`] for machines without a tracked camera:
//! any capture device that can report "a new frame arrived this tick"
//! works. There is no sequence number here; the device's own
//! new-frame signal provides the same gating.

use inkcam_pipeline::Dimensions;
use log::{debug, error};

use crate::error::CaptureError;
use crate::source::{FrameSource, Poll};

/// A generic frame capture device (webcam, virtual camera, ...).
///
/// The device owns its session internally: `open` starts it, `close`
/// tears it down. Frame access is zero-copy; `current_frame` borrows
/// the device's internal buffer until the next tick.
pub trait CaptureDevice {
    /// Names of all capture devices visible to the runtime.
    fn list_devices(&self) -> Vec<String>;

    /// Open a capture session on the named device, requesting the
    /// given geometry. Returns the dimensions actually granted, which
    /// may differ from the request.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::DeviceUnavailable`] when the device
    /// cannot be opened.
    fn open(
        &mut self,
        name: &str,
        request: Dimensions,
        mirrored: bool,
        fps: u32,
    ) -> Result<Dimensions, CaptureError>;

    /// Whether the session is currently streaming.
    fn is_playing(&self) -> bool;

    /// Whether a new frame arrived since the previous tick.
    /// Edge-triggered: a `true` is consumed by the call.
    fn has_new_frame(&mut self) -> bool;

    /// The most recent frame as raw RGBA bytes.
    fn current_frame(&self) -> &[u8];

    /// Close the session. Idempotent.
    fn close(&mut self);
}

#[derive(Debug, PartialEq, Eq)]
enum State {
    Live,
    Degraded { snapshot: Option<Vec<u8>> },
}

/// Frame source backed by a generic capture device.
pub struct WebcamSource<D: CaptureDevice> {
    device: D,
    dimensions: Dimensions,
    state: State,
}

impl<D: CaptureDevice> WebcamSource<D> {
    /// Open `name` on the given device at the requested geometry.
    ///
    /// Logs the enumerated device list at debug level first. An open
    /// failure is logged once and produces a degraded source with the
    /// `fallback` dimensions.
    pub fn open(
        mut device: D,
        name: &str,
        request: Dimensions,
        mirrored: bool,
        fps: u32,
        fallback: Dimensions,
    ) -> Self {
        for (i, device_name) in device.list_devices().iter().enumerate() {
            debug!("capture device {i}: {device_name}");
        }

        match device.open(name, request, mirrored, fps) {
            Ok(dimensions) => Self {
                device,
                dimensions,
                state: State::Live,
            },
            Err(err) => {
                error!("webcam {name:?} unavailable, serving fallback: {err}");
                Self {
                    device,
                    dimensions: fallback,
                    state: State::Degraded { snapshot: None },
                }
            }
        }
    }
}

impl<D: CaptureDevice> FrameSource for WebcamSource<D> {
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
            State::Live => {
                if self.device.is_playing() && self.device.has_new_frame() {
                    Poll::Frame(self.device.current_frame())
                } else {
                    Poll::Absent
                }
            }
        }
    }
}

impl<D: CaptureDevice> Drop for WebcamSource<D> {
    fn drop(&mut self) {
        if self.state == State::Live {
            self.device.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDevice {
        open_ok: bool,
        playing: bool,
        new_frames: Vec<bool>,
        cursor: usize,
        frame: Vec<u8>,
        closed: u32,
    }

    impl FakeDevice {
        fn new(open_ok: bool, new_frames: &[bool]) -> Self {
            Self {
                open_ok,
                playing: true,
                new_frames: new_frames.to_vec(),
                cursor: 0,
                frame: vec![42; 8],
                closed: 0,
            }
        }
    }

    impl CaptureDevice for FakeDevice {
        fn list_devices(&self) -> Vec<String> {
            vec!["HTC Vive".to_string(), "Integrated Webcam".to_string()]
        }

        fn open(
            &mut self,
            _name: &str,
            request: Dimensions,
            _mirrored: bool,
            _fps: u32,
        ) -> Result<Dimensions, CaptureError> {
            if self.open_ok {
                Ok(request)
            } else {
                Err(CaptureError::DeviceUnavailable("HTC Vive".to_string()))
            }
        }

        fn is_playing(&self) -> bool {
            self.playing
        }

        fn has_new_frame(&mut self) -> bool {
            let fresh = self.new_frames.get(self.cursor).copied().unwrap_or(false);
            self.cursor += 1;
            fresh
        }

        fn current_frame(&self) -> &[u8] {
            &self.frame
        }

        fn close(&mut self) {
            self.closed += 1;
        }
    }

    const REQUEST: Dimensions = Dimensions::new(2, 1);
    const FALLBACK: Dimensions = Dimensions::new(3, 2);

    fn open_source(device: FakeDevice) -> WebcamSource<FakeDevice> {
        WebcamSource::open(device, "HTC Vive", REQUEST, false, 60, FALLBACK)
    }

    #[test]
    fn new_frame_signal_gates_delivery() {
        let mut source = open_source(FakeDevice::new(true, &[true, false, true]));
        assert!(source.poll_frame().is_frame());
        assert_eq!(source.poll_frame(), Poll::Absent);
        assert!(source.poll_frame().is_frame());
    }

    #[test]
    fn paused_device_yields_absent() {
        let mut device = FakeDevice::new(true, &[true, true]);
        device.playing = false;
        let mut source = open_source(device);
        assert_eq!(source.poll_frame(), Poll::Absent);
    }

    #[test]
    fn open_failure_degrades_with_fallback_dimensions() {
        let mut source = open_source(FakeDevice::new(false, &[]));
        assert!(source.is_degraded());
        assert_eq!(source.dimensions(), FALLBACK);
        assert_eq!(source.poll_frame(), Poll::Absent);

        source.set_fallback(vec![5, 6]);
        match source.poll_frame() {
            Poll::Frame(frame) => assert_eq!(frame, &[5, 6][..]),
            Poll::Absent => unreachable!("expected the fallback snapshot"),
        }
    }

    #[test]
    fn granted_dimensions_reported() {
        let source = open_source(FakeDevice::new(true, &[]));
        assert_eq!(source.dimensions(), REQUEST);
        assert!(!source.is_degraded());
    }
}
