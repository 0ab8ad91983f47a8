//! The per-tick orchestration loop.
//!
//! [`Viewer`] glues a frame source, the stylizer, and a presentation
//! surface together. Each tick it decides what (if anything) to draw:
//!
//! 1. A degraded source gets its fallback snapshot installed, once,
//!    from whatever the surface currently shows; with nothing captured
//!    yet the tick is skipped.
//! 2. The source is polled; an absent frame skips the tick so the
//!    previous image stays on the surface.
//! 3. With the filter on, the frame runs through the stylizer; with it
//!    off, the raw frame is forwarded untouched.
//! 4. An edge-triggered toggle flips the filter flag and re-applies
//!    the orientation decision.

use inkcam_capture::{FrameSource, Poll};
use inkcam_pipeline::{PipelineError, Stylizer, StylizerConfig};
use log::warn;

use crate::orientation::effective_orientation;
use crate::surface::PresentationSurface;

/// Tick-driven orchestrator for one source/surface pair.
pub struct Viewer<S: FrameSource> {
    source: S,
    /// `None` when the source reported degenerate dimensions; the
    /// pipeline is never constructed or invoked in that case.
    stylizer: Option<Stylizer>,
    filter_enabled: bool,
    orientation_applied: bool,
    fallback_primed: bool,
}

impl<S: FrameSource> Viewer<S> {
    /// Build a viewer over an initialized source.
    ///
    /// Degenerate source dimensions leave the stylizer unconfigured:
    /// the viewer still ticks (serving raw or fallback frames) but
    /// never stylizes.
    pub fn new(source: S, config: StylizerConfig) -> Self {
        let stylizer = match Stylizer::new(source.dimensions(), config) {
            Ok(stylizer) => Some(stylizer),
            Err(err) => {
                warn!("stylizer unavailable: {err}");
                None
            }
        };
        Self {
            source,
            stylizer,
            filter_enabled: true,
            orientation_applied: false,
            fallback_primed: false,
        }
    }

    /// Whether the comic filter is currently applied.
    #[must_use]
    pub const fn filter_enabled(&self) -> bool {
        self.filter_enabled
    }

    /// The underlying frame source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Run one tick of the orchestration loop.
    ///
    /// `toggle_pressed` is the edge-triggered "toggle filter" control
    /// signal for this tick.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::FrameSizeMismatch`] if the source
    /// delivers a frame that does not match its declared dimensions.
    /// That is a wiring bug, not a runtime condition, and is not
    /// swallowed.
    pub fn tick(
        &mut self,
        surface: &mut impl PresentationSurface,
        toggle_pressed: bool,
    ) -> Result<(), PipelineError> {
        if !self.orientation_applied {
            surface.set_orientation(effective_orientation(
                self.filter_enabled,
                self.source.is_degraded(),
            ));
            self.orientation_applied = true;
        }

        // Capture the fallback snapshot the first time degradation is
        // observed. With nothing on the surface yet there is nothing
        // to serve, and the source keeps answering Absent.
        if self.source.is_degraded() && !self.fallback_primed {
            if let Some(snapshot) = surface.pixels() {
                self.source.set_fallback(snapshot);
            }
            self.fallback_primed = true;
        }

        match self.source.poll_frame() {
            Poll::Absent => {}
            Poll::Frame(frame) => {
                if self.filter_enabled {
                    if let Some(stylizer) = &mut self.stylizer {
                        let styled = stylizer.process(frame)?;
                        surface.set_pixels(styled.as_raw());
                    }
                } else {
                    surface.set_pixels(frame);
                }
            }
        }

        if toggle_pressed {
            self.filter_enabled = !self.filter_enabled;
            surface.set_orientation(effective_orientation(
                self.filter_enabled,
                self.source.is_degraded(),
            ));
        }
        Ok(())
    }
}
