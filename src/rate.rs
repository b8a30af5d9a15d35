// SPDX-License-Identifier: MPL-2.0
//! Playback rate domain type.
//!
//! This module provides a type-safe wrapper for playback rate values,
//! ensuring they are always one of the selectable presets (0.5x - 4x).

use crate::config::{DEFAULT_RATE, MAX_RATE, MIN_RATE, RATE_PRESETS};

/// Playback rate value, guaranteed to be one of the rate presets.
///
/// This newtype enforces validity at the type level: any `f64` handed to
/// the constructor is snapped to the nearest preset, so downstream code
/// never sees an off-preset rate.
///
/// # Example
///
/// ```
/// use playhead::rate::PlaybackRate;
///
/// let rate = PlaybackRate::new(2.0);
/// assert_eq!(rate.value(), 2.0);
///
/// // Off-preset values snap to the nearest preset
/// let snapped = PlaybackRate::new(3.1);
/// assert_eq!(snapped.value(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a new playback rate, snapping to the nearest preset.
    /// Non-finite input yields the default rate.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self(DEFAULT_RATE);
        }
        let mut nearest = RATE_PRESETS[0];
        for &preset in RATE_PRESETS {
            if (preset - rate).abs() < (nearest - rate).abs() {
                nearest = preset;
            }
        }
        Self(nearest)
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next faster preset, or self if at maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        let next = RATE_PRESETS
            .iter()
            .find(|&&r| r > self.0 + 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(next)
    }

    /// Returns the next slower preset, or self if at minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        let prev = RATE_PRESETS
            .iter()
            .rev()
            .find(|&&r| r < self.0 - 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(prev)
    }

    /// Returns true if this is the slowest preset.
    #[must_use]
    pub fn is_min(self) -> bool {
        (self.0 - MIN_RATE).abs() < 0.001
    }

    /// Returns true if this is the fastest preset.
    #[must_use]
    pub fn is_max(self) -> bool {
        (self.0 - MAX_RATE).abs() < 0.001
    }

    /// Returns the control label for this rate ("0.5x", "1x", "2x", "4x").
    #[must_use]
    pub fn label(self) -> &'static str {
        if (self.0 - 0.5).abs() < 0.001 {
            "0.5x"
        } else if (self.0 - 2.0).abs() < 0.001 {
            "2x"
        } else if (self.0 - 4.0).abs() < 0.001 {
            "4x"
        } else {
            "1x"
        }
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_RATE)
    }
}
