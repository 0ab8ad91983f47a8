//! inkcam-pipeline: Pure comic/line-art stylization pipeline (sans-IO).
//!
//! Converts live RGBA camera frames into a flat "comic" rendition:
//! grayscale -> tri-level quantization over a striped background ->
//! Canny ink lines composited on top.
//!
//! This crate has **no capture or display dependencies** -- it operates
//! on in-memory pixel buffers and returns references into its own
//! pre-allocated working set. Frame acquisition lives in
//! `inkcam-capture`, presentation in `inkcam-display`.

pub mod background;
pub mod blur;
pub mod composite;
pub mod edge;
pub mod grayscale;
pub mod quantize;
pub mod stylizer;
pub mod types;

pub use stylizer::Stylizer;
pub use types::{Dimensions, PipelineError, Shade, StylizerConfig};
