// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-time mapping for the seek bar.
//!
//! Translates a pointer's horizontal position over the seek bar into a
//! candidate playback time, and decides whether a floating time preview
//! should be shown at all. The preview is suppressed once the pointer
//! strays more than [`SEEK_TOLERANCE_PX`] beyond either edge of the bar,
//! while the candidate time itself stays clamped and usable (a drag that
//! overshoots the bar still seeks to the nearest end).

use crate::config::SEEK_TOLERANCE_PX;

/// Horizontal placement of the seek bar in the pointer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// X coordinate of the bar's left edge.
    pub left_edge: f64,
    /// Rendered width of the bar in pixels.
    pub width: f64,
}

/// Result of mapping one pointer position over the seek bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekPreview {
    /// Candidate playback time in seconds, clamped to `[0, duration]`.
    pub candidate_secs: f64,
    /// Whether the pointer is close enough to the bar for the floating
    /// time label to be shown.
    pub within_tolerance: bool,
    /// Raw pointer offset from the bar's left edge, in pixels. Callers
    /// position the preview overlay with this.
    pub offset_px: f64,
}

/// Maps a pointer X position to a candidate seek time over the given bar.
///
/// The ratio is taken against `width - 1` (the last addressable pixel),
/// falling back to a denominator of 1 when the bar is degenerate. With no
/// known positive duration there is nothing to scale into: the candidate
/// is 0 and the preview is suppressed.
#[must_use]
pub fn map_pointer(geometry: BarGeometry, pointer_x: f64, duration_secs: Option<f64>) -> SeekPreview {
    let offset_px = pointer_x - geometry.left_edge;

    let Some(duration) = duration_secs.filter(|d| d.is_finite() && *d > 0.0) else {
        return SeekPreview {
            candidate_secs: 0.0,
            within_tolerance: false,
            offset_px,
        };
    };

    let denominator = if geometry.width - 1.0 <= 0.0 {
        1.0
    } else {
        geometry.width - 1.0
    };
    let candidate_secs = (offset_px / denominator * duration).clamp(0.0, duration);

    let within_tolerance =
        offset_px >= -SEEK_TOLERANCE_PX && offset_px <= geometry.width + SEEK_TOLERANCE_PX;

    SeekPreview {
        candidate_secs,
        within_tolerance,
        offset_px,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const BAR: BarGeometry = BarGeometry {
        left_edge: 100.0,
        width: 101.0,
    };

    #[test]
    fn maps_pointer_proportionally_across_the_bar() {
        let preview = map_pointer(BAR, 150.0, Some(60.0));
        assert_abs_diff_eq!(preview.candidate_secs, 30.0);
        assert!(preview.within_tolerance);
        assert_abs_diff_eq!(preview.offset_px, 50.0);
    }

    #[test]
    fn pointer_at_left_edge_maps_to_start() {
        let preview = map_pointer(BAR, 100.0, Some(60.0));
        assert_abs_diff_eq!(preview.candidate_secs, 0.0);
        assert!(preview.within_tolerance);
    }

    #[test]
    fn overshoot_clamps_but_stays_previewable_inside_tolerance() {
        // 10 px left of the bar: candidate clamps to 0, label still shown
        let preview = map_pointer(BAR, 90.0, Some(60.0));
        assert_abs_diff_eq!(preview.candidate_secs, 0.0);
        assert!(preview.within_tolerance);

        // 10 px right of the bar: candidate clamps to the duration
        let preview = map_pointer(BAR, 211.0, Some(60.0));
        assert_abs_diff_eq!(preview.candidate_secs, 60.0);
        assert!(preview.within_tolerance);
    }

    #[test]
    fn tolerance_band_is_inclusive_at_both_edges() {
        assert!(map_pointer(BAR, 100.0 - 15.0, Some(60.0)).within_tolerance);
        assert!(map_pointer(BAR, 100.0 + 101.0 + 15.0, Some(60.0)).within_tolerance);
    }

    #[test]
    fn preview_suppressed_beyond_tolerance() {
        let left = map_pointer(BAR, 100.0 - 16.0, Some(60.0));
        assert!(!left.within_tolerance);
        assert_abs_diff_eq!(left.candidate_secs, 0.0);

        let right = map_pointer(BAR, 100.0 + 101.0 + 16.0, Some(60.0));
        assert!(!right.within_tolerance);
        assert_abs_diff_eq!(right.candidate_secs, 60.0);
    }

    #[test]
    fn unknown_duration_maps_to_start_with_no_preview() {
        let preview = map_pointer(BAR, 150.0, None);
        assert_abs_diff_eq!(preview.candidate_secs, 0.0);
        assert!(!preview.within_tolerance);
    }

    #[test]
    fn zero_duration_maps_to_start_with_no_preview() {
        let preview = map_pointer(BAR, 150.0, Some(0.0));
        assert_abs_diff_eq!(preview.candidate_secs, 0.0);
        assert!(!preview.within_tolerance);
    }

    #[test]
    fn degenerate_bar_width_never_divides_by_zero() {
        let sliver = BarGeometry {
            left_edge: 0.0,
            width: 1.0,
        };
        let preview = map_pointer(sliver, 2.0, Some(60.0));
        // Denominator substitutes 1; the wild ratio just clamps
        assert_abs_diff_eq!(preview.candidate_secs, 60.0);
    }
}
