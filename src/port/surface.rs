// SPDX-License-Identifier: MPL-2.0
//! Media surface port definition.
//!
//! This module defines the [`MediaSurface`] trait through which the engine
//! drives whatever is actually rendering the video. The host implements it
//! over its playback widget.
//!
//! # Design Notes
//!
//! - The surface is **stateful** - it owns the real position, duration,
//!   and paused flag; the engine re-reads them instead of shadowing them
//! - Methods are infallible - the real surface reports failures through
//!   its error event, which the host feeds back to the engine as a
//!   numeric code
//! - Not `Send` - the surface lives on the host's event loop thread,
//!   and the engine only touches it from there

use std::sync::Arc;

/// Direction of a single-frame step while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Advance one frame.
    Forward,
    /// Go back one frame.
    Backward,
}

/// A frame handed over by the surface for capture.
///
/// Uses `Arc<Vec<u8>>` so handing the frame to a sink never copies the
/// pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaFrame {
    /// RGBA pixel data, `width * height * 4` bytes.
    pub rgba_data: Arc<Vec<u8>>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl RgbaFrame {
    /// Creates a frame from RGBA data.
    #[must_use]
    pub fn new(rgba_data: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        Self {
            rgba_data,
            width,
            height,
        }
    }
}

/// Port for the rendering surface being controlled.
///
/// # Lifecycle
///
/// 1. `load()` points the surface at a source URL
/// 2. `play()` / `pause()` drive transport
/// 3. `position_secs()` / `duration_secs()` are re-read on every tick
/// 4. `set_position_secs()` applies committed seeks
/// 5. `grab_frame()` hands over the current frame for capture
pub trait MediaSurface {
    /// Points the surface at a new source URL and begins fetching it.
    ///
    /// Loading discards the previous media: the position restarts at
    /// zero, the duration becomes unknown until metadata arrives, and
    /// the surface starts paused.
    fn load(&mut self, url: &str);

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback. Pausing an already paused surface is a no-op.
    fn pause(&mut self);

    /// Whether the surface is currently paused (or never started).
    fn is_paused(&self) -> bool;

    /// Current playback position in seconds.
    fn position_secs(&self) -> f64;

    /// Jumps the playback position.
    fn set_position_secs(&mut self, secs: f64);

    /// Media duration in seconds, or `None` before metadata has loaded.
    fn duration_secs(&self) -> Option<f64>;

    /// Applies a playback rate multiplier.
    fn set_playback_rate(&mut self, rate: f64);

    /// Steps a single frame in the given direction. Only meaningful
    /// while paused.
    fn step_frame(&mut self, direction: StepDirection);

    /// Hands over the currently displayed frame, or `None` when no frame
    /// is available yet.
    fn grab_frame(&self) -> Option<RgbaFrame>;
}
