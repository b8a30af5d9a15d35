// SPDX-License-Identifier: MPL-2.0
//! Timestamp rendering for playback positions.
//!
//! Positions are rendered as `HH:MM:SS.mmm` with zero-padded fields and
//! exactly three millisecond digits. The input is rounded to the nearest
//! millisecond first, then split by truncating division, so accumulated
//! float noise (e.g. `3661.4999999999995`) lands in the intended bucket.

/// The zero position, as rendered.
pub const ZERO: &str = "00:00:00.000";

/// Duration text shown before the media reports its real duration.
pub const PLACEHOLDER: &str = "23:59:59.999";

/// Renders a position in seconds as `HH:MM:SS.mmm`.
///
/// Negative and non-finite inputs render as [`ZERO`]. Hours are padded to
/// two digits and widen naturally past 99.
///
/// # Examples
///
/// ```
/// use playhead::timestamp;
///
/// assert_eq!(timestamp::format(3661.5), "01:01:01.500");
/// assert_eq!(timestamp::format(0.0), "00:00:00.000");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format(secs: f64) -> String {
    let clamped = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    let total_ms = (clamped * 1_000.0).round() as u64;
    let ms = total_ms % 1_000;
    let total_secs = total_ms / 1_000;
    let sec = total_secs % 60;
    let min = (total_secs / 60) % 60;
    let hour = total_secs / 3_600;
    format!("{hour:02}:{min:02}:{sec:02}.{ms:03}")
}
