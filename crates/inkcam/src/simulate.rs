//! Synthetic end-to-end loop.
//!
//! Drives the full capture -> stylize -> display chain without
//! hardware: a scripted tracked camera serves the input image with a
//! sequence number that advances every other tick (so half the polls
//! exercise the stale-frame gate), and an in-memory surface stands in
//! for the renderer.

use std::cell::Cell;
use std::path::Path;

use image::RgbaImage;
use inkcam_capture::{
    CaptureError, FrameSize, StreamHandle, TrackedCameraApi, TrackedCameraSource,
};
use inkcam_display::{Orientation, PresentationSurface, Viewer};
use inkcam_pipeline::{Dimensions, StylizerConfig};

/// Tracked camera that replays one frame forever.
///
/// The sequence number advances on every second header query, so the
/// viewer sees a realistic mix of fresh and stale polls.
struct LoopedCamera {
    frame: Vec<u8>,
    dimensions: Dimensions,
    header_queries: Cell<u32>,
}

impl LoopedCamera {
    fn new(image: &RgbaImage, dimensions: Dimensions) -> Self {
        Self {
            frame: image.as_raw().clone(),
            dimensions,
            header_queries: Cell::new(0),
        }
    }

    fn sequence(&self) -> u32 {
        self.header_queries.get() / 2
    }
}

impl TrackedCameraApi for LoopedCamera {
    fn has_camera(&self, _index: u32) -> Result<bool, CaptureError> {
        Ok(true)
    }

    fn frame_size(&self, _index: u32) -> Result<FrameSize, CaptureError> {
        Ok(FrameSize {
            dimensions: self.dimensions,
            buffer_len: self.frame.len(),
        })
    }

    fn acquire_stream(&self, _index: u32) -> Result<StreamHandle, CaptureError> {
        Ok(StreamHandle(1))
    }

    fn frame_header(&self, _stream: StreamHandle) -> Result<u32, CaptureError> {
        self.header_queries.set(self.header_queries.get() + 1);
        Ok(self.sequence())
    }

    fn read_frame(&self, _stream: StreamHandle, payload: &mut [u8]) -> Result<u32, CaptureError> {
        payload.copy_from_slice(&self.frame);
        Ok(self.sequence())
    }

    fn release_stream(&self, _stream: StreamHandle) {}
}

/// In-memory presentation surface.
#[derive(Default)]
struct BufferSurface {
    pixels: Option<Vec<u8>>,
    orientation: Option<Orientation>,
    uploads: u32,
}

impl PresentationSurface for BufferSurface {
    fn set_pixels(&mut self, rgba: &[u8]) {
        self.pixels = Some(rgba.to_vec());
        self.uploads += 1;
    }

    fn pixels(&self) -> Option<Vec<u8>> {
        self.pixels.clone()
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }
}

/// Run the viewer loop for `ticks` ticks and write the final surface
/// contents.
pub fn run(
    image: &RgbaImage,
    dimensions: Dimensions,
    config: StylizerConfig,
    ticks: u32,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let camera = LoopedCamera::new(image, dimensions);
    let source = TrackedCameraSource::initialize(camera, 0, dimensions);
    let mut viewer = Viewer::new(source, config);
    let mut surface = BufferSurface::default();

    for _ in 0..ticks {
        viewer.tick(&mut surface, false)?;
    }
    println!(
        "ran {ticks} tick(s), {} upload(s), orientation {:?}",
        surface.uploads, surface.orientation,
    );

    match surface.pixels {
        Some(pixels) => {
            let styled = RgbaImage::from_raw(dimensions.width, dimensions.height, pixels)
                .ok_or("surface buffer does not match frame dimensions")?;
            styled.save(output)?;
            println!("wrote {}", output.display());
        }
        None => println!("no frame reached the surface; nothing written"),
    }
    Ok(())
}
