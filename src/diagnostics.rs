// SPDX-License-Identifier: MPL-2.0
//! Session event log.
//!
//! Records the notable events of a playback session in a bounded ring
//! so a host can inspect recent history when troubleshooting. The log
//! never grows past its capacity; once full, recording a new event
//! evicts the oldest one. The whole log can be exported as a JSON
//! report in which events are stamped relative to collection start.

use std::collections::VecDeque;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EVENT_LOG_CAPACITY;
use crate::fault::FaultCategory;

/// A notable event in the life of a playback session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// A media source passed validation and was handed to the surface.
    MediaLoaded { file_name: String },
    /// Playback started and the position poll loop went live.
    PlaybackStarted,
    /// Playback halted.
    PlaybackPaused,
    /// A seek gesture ended and its target was applied to the surface.
    SeekCommitted { target_secs: f64 },
    /// The playback rate changed.
    RateChanged { rate: f64 },
    /// A frame was captured and written to disk.
    FrameCaptured { path: String },
    /// The surface reported a media error.
    FaultReported { category: FaultCategory },
    /// The session was torn down and the player returned to idle.
    SessionReset,
}

/// A [`PlayerEvent`] together with the instant it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    /// When the event was recorded.
    pub at: Instant,
    /// What happened.
    pub event: PlayerEvent,
}

/// An event prepared for serialization.
///
/// This wrapper converts [`LoggedEvent`] timestamps (which use
/// `Instant`) to relative milliseconds since collection started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub timestamp_ms: u64,
    /// The event data.
    #[serde(flatten)]
    pub event: PlayerEvent,
}

/// Exported form of the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventReport {
    /// When collection started (ISO 8601).
    pub collection_started_at: String,
    /// Retained events, oldest first.
    pub events: Vec<SerializableEvent>,
}

/// Bounded ring of session events.
#[derive(Debug)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl EventLog {
    /// Creates an empty log holding at most `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Records an event, evicting the oldest entry if the log is full.
    pub fn record(&mut self, event: PlayerEvent) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedEvent {
            at: Instant::now(),
            event,
        });
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of events the log retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.entries.iter()
    }

    /// The most recently recorded event, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&LoggedEvent> {
        self.entries.back()
    }

    /// Drops all retained events.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Exports the retained events as a pretty JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> EventReport {
        let events = self
            .entries
            .iter()
            .map(|entry| SerializableEvent {
                timestamp_ms: entry.at.duration_since(self.started_at).as_millis() as u64,
                event: entry.event.clone(),
            })
            .collect();

        EventReport {
            collection_started_at: self.started_at_utc.to_rfc3339(),
            events,
        }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(EVENT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_events_in_order() {
        let mut log = EventLog::new(8);
        log.record(PlayerEvent::PlaybackStarted);
        log.record(PlayerEvent::PlaybackPaused);

        let events: Vec<_> = log.iter().map(|entry| entry.event.clone()).collect();
        assert_eq!(
            events,
            vec![PlayerEvent::PlaybackStarted, PlayerEvent::PlaybackPaused]
        );
        assert_eq!(
            log.latest().map(|entry| &entry.event),
            Some(&PlayerEvent::PlaybackPaused)
        );

        let stamps: Vec<_> = log.iter().map(|entry| entry.at).collect();
        assert!(stamps[0] <= stamps[1]);
    }

    #[test]
    fn full_log_evicts_the_oldest_event() {
        let mut log = EventLog::new(2);
        log.record(PlayerEvent::PlaybackStarted);
        log.record(PlayerEvent::PlaybackPaused);
        log.record(PlayerEvent::SessionReset);

        assert_eq!(log.len(), 2);
        let events: Vec<_> = log.iter().map(|entry| entry.event.clone()).collect();
        assert_eq!(
            events,
            vec![PlayerEvent::PlaybackPaused, PlayerEvent::SessionReset]
        );
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut log = EventLog::new(0);
        log.record(PlayerEvent::PlaybackStarted);
        log.record(PlayerEvent::PlaybackPaused);

        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = EventLog::default();
        log.record(PlayerEvent::SessionReset);
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = PlayerEvent::SeekCommitted { target_secs: 12.5 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "seek_committed");
        assert_eq!(json["target_secs"], 12.5);

        let fault = PlayerEvent::FaultReported {
            category: FaultCategory::NotFound,
        };
        let json = serde_json::to_value(&fault).unwrap();
        assert_eq!(json["event"], "fault_reported");
        assert_eq!(json["category"], "not_found");
    }

    #[test]
    fn export_json_carries_the_collection_anchor_and_tags() {
        let mut log = EventLog::new(4);
        log.record(PlayerEvent::MediaLoaded {
            file_name: "clip.mp4".to_owned(),
        });

        let json = log.export_json().unwrap();
        assert!(json.contains("\"collection_started_at\""));
        assert!(json.contains("\"timestamp_ms\""));
        assert!(json.contains("\"event\": \"media_loaded\""));
        assert!(json.contains("\"file_name\": \"clip.mp4\""));
    }

    #[test]
    fn export_json_timestamps_are_relative_and_ordered() {
        let mut log = EventLog::new(4);
        log.record(PlayerEvent::PlaybackStarted);
        log.record(PlayerEvent::PlaybackPaused);

        let report: serde_json::Value =
            serde_json::from_str(&log.export_json().unwrap()).unwrap();
        let events = report["events"].as_array().unwrap();
        assert_eq!(events.len(), 2);

        let first = events[0]["timestamp_ms"].as_u64().unwrap();
        let second = events[1]["timestamp_ms"].as_u64().unwrap();
        assert!(first <= second);
    }
}
