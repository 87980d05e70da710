// SPDX-License-Identifier: MPL-2.0
//! Slideshow timing newtypes.
//!
//! These wrappers keep timing values within valid ranges so the state machine
//! never schedules a zero-period timer or an unbounded fade.

use std::time::Duration;

// =============================================================================
// Slideshow Interval Bounds
// =============================================================================

/// Slideshow period bounds (0.5 to 60 seconds).
pub mod interval_bounds {
    /// Minimum period in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum period in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default period in milliseconds.
    pub const DEFAULT_MS: u64 = 2000;
}

// =============================================================================
// SlideshowInterval
// =============================================================================

/// Period between two automatic advances of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowInterval(u64);

impl SlideshowInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(interval_bounds::MIN_MS, interval_bounds::MAX_MS))
    }

    /// Returns the period in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideshowInterval {
    fn default() -> Self {
        Self(interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Fade Duration Bounds
// =============================================================================

/// Crossfade half bounds (0 to 5 seconds). Zero disables the animation.
pub mod fade_bounds {
    /// Maximum duration in milliseconds.
    pub const MAX_MS: u64 = 5_000;
    /// Default duration in milliseconds.
    pub const DEFAULT_MS: u64 = 500;
}

// =============================================================================
// FadeDuration
// =============================================================================

/// Duration of one half (out or in) of a crossfade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a new fade duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.min(fade_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(fade_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_clamps_to_valid_range() {
        assert_eq!(
            SlideshowInterval::from_millis(0).as_millis(),
            interval_bounds::MIN_MS
        );
        assert_eq!(
            SlideshowInterval::from_millis(u64::MAX).as_millis(),
            interval_bounds::MAX_MS
        );
    }

    #[test]
    fn interval_default_is_two_seconds() {
        assert_eq!(
            SlideshowInterval::default().as_duration(),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn fade_clamps_to_max() {
        assert_eq!(FadeDuration::from_millis(60_000).as_millis(), fade_bounds::MAX_MS);
    }

    #[test]
    fn zero_fade_is_allowed() {
        assert_eq!(FadeDuration::from_millis(0).as_duration(), Duration::ZERO);
    }

    #[test]
    fn fade_default_is_half_a_second() {
        assert_eq!(
            FadeDuration::default().as_duration(),
            Duration::from_millis(500)
        );
    }
}
