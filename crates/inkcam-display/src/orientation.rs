//! Display orientation decision.
//!
//! Which way the presentation surface should face is a pure function
//! of the filter flag and the source's degraded state; applying it is
//! the surface's concern.

/// How the presentation surface should display its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Upright, unmirrored.
    Normal,
    /// Horizontally mirrored and rotated 180 degrees.
    Mirrored,
}

/// Decide the effective orientation for the current state.
///
/// The filter flag maps directly to orientation (`enabled` is upright)
/// except under a degraded source, where the flag is inverted before
/// being applied: the fallback snapshot was captured post-transform
/// and reads correctly the other way around.
#[must_use]
pub const fn effective_orientation(filter_enabled: bool, degraded: bool) -> Orientation {
    let enabled = if degraded {
        !filter_enabled
    } else {
        filter_enabled
    };
    if enabled {
        Orientation::Normal
    } else {
        Orientation::Mirrored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_enabled_is_upright() {
        assert_eq!(effective_orientation(true, false), Orientation::Normal);
    }

    #[test]
    fn filter_disabled_is_mirrored() {
        assert_eq!(effective_orientation(false, false), Orientation::Mirrored);
    }

    #[test]
    fn degraded_inverts_the_flag() {
        // Requested enable=true under a degraded source applies the
        // mirrored orientation.
        assert_eq!(effective_orientation(true, true), Orientation::Mirrored);
        assert_eq!(effective_orientation(false, true), Orientation::Normal);
    }
}
