// SPDX-License-Identifier: MPL-2.0
//! The loaded-media session record.
//!
//! A session exists from the moment a validated URL is handed to the
//! surface until the player is reset. Duration starts unknown and is
//! recorded once the surface reports metadata; nothing in the crate ever
//! scales against an unknown duration.

use url::Url;

use crate::rate::PlaybackRate;

/// State describing the currently loaded source.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSession {
    source: Url,
    duration_secs: Option<f64>,
    rate: PlaybackRate,
}

impl MediaSession {
    /// Creates a session for a validated source URL. Duration is unknown
    /// until the surface reports it; rate starts at 1x.
    #[must_use]
    pub fn new(source: Url) -> Self {
        Self {
            source,
            duration_secs: None,
            rate: PlaybackRate::default(),
        }
    }

    /// The validated source URL.
    #[must_use]
    pub fn source(&self) -> &Url {
        &self.source
    }

    /// The source's file name (final path segment), shown as the session
    /// title.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.source
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
    }

    /// Media duration in seconds, if the surface has reported it.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Records the duration reported by the surface. Non-finite and
    /// non-positive reports leave the duration unknown.
    pub fn record_duration(&mut self, secs: f64) {
        if secs.is_finite() && secs > 0.0 {
            self.duration_secs = Some(secs);
        }
    }

    /// The selected playback rate.
    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    /// Selects a playback rate.
    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
    }
}
