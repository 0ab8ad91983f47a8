//! Capture error taxonomy.
//!
//! Errors here split into two severities, handled at the call site:
//!
//! - initialization failures are fatal to the session and drive the
//!   source into its sticky degraded state;
//! - per-frame query failures are transient, logged, and mapped to an
//!   absent frame for that tick only.

/// Errors reported by capture devices.
///
/// Device APIs report status codes rather than throwing; every
/// non-success code maps to one of these variants.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The runtime enumerated devices but found no camera at the
    /// requested index.
    #[error("no camera found at device index {index}")]
    NoCamera {
        /// Requested device index.
        index: u32,
    },

    /// A device API call returned a non-success status code.
    #[error("{call} failed with device error code {code}")]
    Api {
        /// Name of the failing API call.
        call: &'static str,
        /// Raw device status code.
        code: i32,
    },

    /// The capture device could not be opened at all.
    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),
}
