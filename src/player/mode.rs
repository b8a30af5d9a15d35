// SPDX-License-Identifier: MPL-2.0
//! Playback mode for the player state machine.
//!
//! Models the lifecycle of a playback session with explicit transitions:
//! - Idle: no media attached
//! - Loaded: media attached, never started
//! - Playing: surface is running and the position poll loop is live
//! - Paused: surface is halted at a position
//! - Seeking: a seek-bar drag is in progress

/// Playback mode of the engine.
///
/// This enum represents all possible modes of the player, ensuring
/// type-safe transitions via pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// No media attached. Initial mode, and the mode after a reset.
    Idle,

    /// Media attached and fetching, never started.
    Loaded,

    /// Surface is playing and exactly one poll ticker is live.
    Playing,

    /// Surface is halted at its current position.
    Paused,

    /// A seek-bar drag is in progress. The surface is halted for the
    /// duration of the gesture; `resume_on_release` records whether
    /// playback was running when the gesture started and should resume
    /// when it ends.
    Seeking {
        resume_on_release: bool,
    },
}

impl PlaybackMode {
    /// Returns true if no media is attached.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the surface is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the surface is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if a seek gesture is in progress.
    #[must_use]
    pub fn is_seeking(self) -> bool {
        matches!(self, Self::Seeking { .. })
    }

    /// Returns true if playback is running or will resume once the
    /// current seek gesture ends.
    #[must_use]
    pub fn is_playing_or_will_resume(self) -> bool {
        match self {
            Self::Playing => true,
            Self::Seeking { resume_on_release } => resume_on_release,
            _ => false,
        }
    }

    /// Returns true if the surface is halted and will stay halted
    /// (paused, or seeking with no resume intent).
    #[must_use]
    pub fn is_effectively_paused(self) -> bool {
        match self {
            Self::Paused => true,
            Self::Seeking { resume_on_release } => !resume_on_release,
            _ => false,
        }
    }
}
