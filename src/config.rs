// SPDX-License-Identifier: MPL-2.0
//! Centralized constants for the playback engine.
//!
//! This module serves as the single source of truth for the tuning values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Position Polling**: cadence of the playback position refresh loop
//! - **Seek Bar**: pointer-to-time mapping tolerances
//! - **Playback Rate**: discrete rate presets
//! - **Diagnostics**: event log sizing

use std::time::Duration;

// ==========================================================================
// Position Polling
// ==========================================================================

/// Position refresh rate while playing, in ticks per second.
pub const POLL_RATE_HZ: u32 = 25;

/// Interval between position refresh ticks, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1_000 / POLL_RATE_HZ as u64;

/// Interval between position refresh ticks as a [`Duration`].
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

// ==========================================================================
// Seek Bar
// ==========================================================================

/// Horizontal margin, in pixels, beyond the seek bar's edges within which
/// a pointer still maps to a previewable time. Outside this band the
/// candidate time is still clamped and usable, but the preview label is
/// suppressed.
pub const SEEK_TOLERANCE_PX: f64 = 15.0;

// ==========================================================================
// Playback Rate
// ==========================================================================

/// Default playback rate (1.0 = normal speed).
pub const DEFAULT_RATE: f64 = 1.0;

/// Minimum selectable playback rate.
pub const MIN_RATE: f64 = 0.5;

/// Maximum selectable playback rate.
pub const MAX_RATE: f64 = 4.0;

/// Playback rate presets for the rate control buttons.
/// Ordered from slowest to fastest.
pub const RATE_PRESETS: &[f64] = &[0.5, 1.0, 2.0, 4.0];

// ==========================================================================
// Diagnostics
// ==========================================================================

/// Maximum number of player events retained in the in-memory log.
/// Older events are evicted once the buffer is full.
pub const EVENT_LOG_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Polling validation
    assert!(POLL_RATE_HZ > 0);
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS * POLL_RATE_HZ as u64 == 1_000);

    // Seek bar validation
    assert!(SEEK_TOLERANCE_PX > 0.0);

    // Rate validation
    assert!(MIN_RATE > 0.0);
    assert!(MAX_RATE > MIN_RATE);
    assert!(DEFAULT_RATE >= MIN_RATE);
    assert!(DEFAULT_RATE <= MAX_RATE);

    // Ensure presets array is not empty
    assert!(!RATE_PRESETS.is_empty());

    // Validate presets are in ascending order and within bounds
    let mut i = 0;
    while i < RATE_PRESETS.len() {
        assert!(RATE_PRESETS[i] >= MIN_RATE);
        assert!(RATE_PRESETS[i] <= MAX_RATE);

        // Presets must be in ascending order (for cycling to work correctly)
        if i > 0 {
            assert!(RATE_PRESETS[i] > RATE_PRESETS[i - 1]);
        }
        i += 1;
    }

    // Bounds coincide with the outermost presets
    assert!(RATE_PRESETS[0] == MIN_RATE);
    assert!(RATE_PRESETS[RATE_PRESETS.len() - 1] == MAX_RATE);

    // Ensure the default rate (1.0) is in the presets
    let mut found_default = false;
    let mut j = 0;
    while j < RATE_PRESETS.len() {
        // Use integer comparison to avoid floating point issues
        if (RATE_PRESETS[j] * 100.0) as i32 == (DEFAULT_RATE * 100.0) as i32 {
            found_default = true;
        }
        j += 1;
    }
    assert!(found_default);

    // Diagnostics validation
    assert!(EVENT_LOG_CAPACITY > 0);
};
