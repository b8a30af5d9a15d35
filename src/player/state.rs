// SPDX-License-Identifier: MPL-2.0
//! The playback state machine.
//!
//! [`Player`] coordinates one streamed MP4 session over a host-provided
//! [`MediaSurface`]: transport, the position poll loop, seek gestures
//! with preview, rate changes, frame capture, and fault classification.
//! The surface owns the real position and duration; the player re-reads
//! them instead of shadowing them, so the rendered numbers can never
//! drift from what the surface is actually showing.
//!
//! Operations that start playback spawn the poll ticker and must run
//! within a tokio runtime. Everything else is plain synchronous state.

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::config::{DEFAULT_RATE, EVENT_LOG_CAPACITY};
use crate::diagnostics::{EventLog, PlayerEvent};
use crate::error::{Error, Result};
use crate::fault::{self, FaultCategory, SurfaceErrorCode};
use crate::player::mode::PlaybackMode;
use crate::player::ticker::{Tick, TickerHandle};
use crate::port::{FrameSink, FullscreenHost, MediaSurface, StepDirection};
use crate::rate::PlaybackRate;
use crate::seekbar::{self, BarGeometry, SeekPreview};
use crate::session::MediaSession;
use crate::source_url;
use crate::timestamp;

/// Live seek-bar drag bookkeeping.
///
/// Created by `start_seek`, discarded by `end_seek`. Only in-tolerance
/// previews update the pending target; releasing with no pending target
/// commits position zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct SeekGesture {
    pending_secs: Option<f64>,
}

/// Render-ready snapshot of the playhead for one display refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionDisplay {
    timestamp: String,
    percent: f64,
}

impl PositionDisplay {
    /// Builds a display snapshot from a position and an optional
    /// duration. With no known positive duration the progress fraction
    /// has nothing to scale into and the percentage is 0.
    #[must_use]
    pub fn new(position_secs: f64, duration_secs: Option<f64>) -> Self {
        let percent = match duration_secs {
            Some(duration) if duration.is_finite() && duration > 0.0 => {
                let ratio = position_secs / duration;
                if ratio.is_finite() {
                    (ratio * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                }
            }
            _ => 0.0,
        };

        Self {
            timestamp: timestamp::format(position_secs),
            percent,
        }
    }

    /// Formatted `HH:MM:SS.mmm` position text.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Progress through the media in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Progress rounded to a whole percentage, for the textual readout.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent_rounded(&self) -> u32 {
        // percent is clamped to [0, 100], so the cast is lossless
        self.percent.round() as u32
    }

    /// Progress with millesimal precision, the value written into the
    /// seek bar itself.
    #[must_use]
    pub fn bar_value(&self) -> String {
        format!("{:.3}", self.percent)
    }
}

/// Which user controls are operable in the current mode.
///
/// The engine only reports these; the host owns the actual widgets and
/// applies the enablement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAffordances {
    /// Single-frame stepping. Available once media is attached and the
    /// surface is not running.
    pub can_step: bool,
    /// Still-frame capture. Same availability as stepping.
    pub can_capture: bool,
}

/// Playback controller for one media session over a host surface.
///
/// Owns the mode machine, the session record, the seek gesture, and the
/// lifecycle of the position poll ticker. At most one ticker is ever
/// live: starting playback aborts the previous ticker task and bumps a
/// generation stamp, and [`Player::poll_tick`] discards ticks whose
/// stamp does not match. That is what makes `pause` deterministic even
/// with ticks already queued in the channel.
#[derive(Debug)]
pub struct Player<S: MediaSurface> {
    /// Host playback surface under control.
    surface: S,
    /// Current mode of the state machine.
    mode: PlaybackMode,
    /// Attached media, if any. `Some` exactly when `mode` is not Idle.
    session: Option<MediaSession>,
    /// Live seek-bar drag, if one is in progress.
    gesture: Option<SeekGesture>,
    /// Handle to the live poll ticker. `Some` exactly while Playing.
    ticker: Option<TickerHandle>,
    /// Monotonic stamp handed to each new ticker.
    ticker_generation: u64,
    /// Sender cloned into every spawned ticker.
    tick_tx: mpsc::UnboundedSender<Tick>,
    /// Transport status from the latest diagnostic probe, if one
    /// completed.
    probe_status: Option<u16>,
    /// Recent session events.
    log: EventLog,
}

impl<S: MediaSurface> Player<S> {
    /// Creates an idle player over `surface` and returns it together
    /// with the receiving end of the tick channel. The host pumps that
    /// receiver and feeds each [`Tick`] back into [`Player::poll_tick`].
    pub fn new(surface: S) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let player = Self {
            surface,
            mode: PlaybackMode::Idle,
            session: None,
            gesture: None,
            ticker: None,
            ticker_generation: 0,
            tick_tx,
            probe_status: None,
            log: EventLog::new(EVENT_LOG_CAPACITY),
        };
        (player, tick_rx)
    }

    /// Validates `raw_url` and attaches it as the new media session.
    ///
    /// Only valid from Idle; the host tears a previous session down
    /// with [`Player::reset`] before offering the input again. On
    /// success the normalized URL is handed to the surface, the rate
    /// returns to its default, and the duration is unknown until the
    /// surface reports one. A rejected URL changes nothing.
    ///
    /// Hosts typically also start a diagnostic probe for the same URL
    /// and feed its outcome into [`Player::on_probe_status`].
    ///
    /// State transitions:
    /// - Idle -> Loaded on success
    /// - unchanged on rejection
    pub fn load(&mut self, raw_url: &str) -> Result<()> {
        if !self.mode.is_idle() {
            return Err(Error::SessionActive);
        }
        let source = source_url::validate(raw_url)?;

        // A probe launched for an abandoned session may have reported
        // after the reset; its status must not classify this source.
        self.probe_status = None;

        let session = MediaSession::new(source);
        self.surface.load(session.source().as_str());
        self.surface.set_playback_rate(session.rate().value());
        self.log.record(PlayerEvent::MediaLoaded {
            file_name: session.file_name().to_owned(),
        });
        self.session = Some(session);
        self.mode = PlaybackMode::Loaded;
        Ok(())
    }

    /// Starts or resumes playback and brings the poll loop live.
    ///
    /// State transitions:
    /// - Loaded -> Playing
    /// - Paused -> Playing
    /// - Idle | Playing | Seeking -> no-op
    pub fn play(&mut self) {
        if !matches!(self.mode, PlaybackMode::Loaded | PlaybackMode::Paused) {
            return;
        }
        self.surface.play();
        self.start_ticker();
        self.mode = PlaybackMode::Playing;
        self.log.record(PlayerEvent::PlaybackStarted);
    }

    /// Halts playback and tears the poll loop down.
    ///
    /// The ticker handle is aborted and the generation it carried goes
    /// stale, so a tick already queued when the pause lands renders
    /// nothing.
    ///
    /// State transitions:
    /// - Playing -> Paused
    /// - any other mode -> no-op
    pub fn pause(&mut self) {
        if !self.mode.is_playing() {
            return;
        }
        self.surface.pause();
        self.stop_ticker();
        self.mode = PlaybackMode::Paused;
        self.log.record(PlayerEvent::PlaybackPaused);
    }

    /// Play/pause flip, resolved against the surface's own paused flag.
    ///
    /// State transitions:
    /// - Playing -> Paused
    /// - Loaded | Paused -> Playing
    /// - Idle | Seeking -> no-op
    pub fn toggle(&mut self) {
        if matches!(self.mode, PlaybackMode::Idle | PlaybackMode::Seeking { .. }) {
            return;
        }
        if self.surface.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Begins a seek-bar drag.
    ///
    /// Dragging while playing halts the surface for the duration of the
    /// gesture and arms a resume for the release. From Loaded the
    /// gesture only accumulates a pending target; the mode keeps its
    /// never-started meaning.
    ///
    /// State transitions:
    /// - Playing -> Seeking { resume_on_release: true } (surface pauses)
    /// - Paused -> Seeking { resume_on_release: false }
    /// - Loaded -> Loaded (gesture armed, no mode change)
    /// - Idle | Seeking -> no-op
    pub fn start_seek(&mut self) {
        match self.mode {
            PlaybackMode::Playing => {
                self.pause();
                self.gesture = Some(SeekGesture::default());
                self.mode = PlaybackMode::Seeking {
                    resume_on_release: true,
                };
            }
            PlaybackMode::Paused => {
                self.gesture = Some(SeekGesture::default());
                self.mode = PlaybackMode::Seeking {
                    resume_on_release: false,
                };
            }
            PlaybackMode::Loaded => {
                self.gesture = Some(SeekGesture::default());
            }
            PlaybackMode::Idle | PlaybackMode::Seeking { .. } => {}
        }
    }

    /// Maps one pointer position over the seek bar and returns the
    /// preview for the floating time label.
    ///
    /// While a gesture is live, an in-tolerance preview also becomes
    /// the pending seek target. Out-of-tolerance samples only suppress
    /// the label; they never touch the pending target.
    pub fn update_seek_preview(&mut self, geometry: BarGeometry, pointer_x: f64) -> SeekPreview {
        let preview = seekbar::map_pointer(geometry, pointer_x, self.surface.duration_secs());
        if preview.within_tolerance {
            if let Some(gesture) = self.gesture.as_mut() {
                gesture.pending_secs = Some(preview.candidate_secs);
            }
        }
        preview
    }

    /// Applies the pending seek target to the surface mid-drag and
    /// returns the refreshed display, or `None` when no gesture is
    /// live. The gesture stays armed; the drag continues.
    pub fn commit_seek(&mut self) -> Option<PositionDisplay> {
        let gesture = self.gesture.as_ref()?;
        let target = seek_target(gesture);
        self.surface.set_position_secs(target);
        Some(self.position_display())
    }

    /// Ends the seek gesture: commits the pending target, then resumes
    /// playback iff the gesture armed a resume.
    ///
    /// Returns the refreshed display, or `None` when no gesture was
    /// live (a stray release changes nothing).
    ///
    /// State transitions:
    /// - Seeking { resume_on_release: true } -> Playing
    /// - Seeking { resume_on_release: false } -> Paused
    /// - Loaded -> Loaded
    pub fn end_seek(&mut self) -> Option<PositionDisplay> {
        let gesture = self.gesture.take()?;
        let target = seek_target(&gesture);
        self.surface.set_position_secs(target);
        self.log.record(PlayerEvent::SeekCommitted {
            target_secs: target,
        });

        if let PlaybackMode::Seeking { resume_on_release } = self.mode {
            self.mode = PlaybackMode::Paused;
            if resume_on_release {
                self.play();
            }
        }
        Some(self.position_display())
    }

    /// Applies a playback rate to the session and the surface.
    ///
    /// No-op without a session.
    pub fn set_rate(&mut self, rate: PlaybackRate) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.set_rate(rate);
        self.surface.set_playback_rate(rate.value());
        self.log.record(PlayerEvent::RateChanged { rate: rate.value() });
    }

    /// Moves to the next faster rate preset, saturating at the fastest.
    pub fn increase_rate(&mut self) {
        let current = self.rate();
        let next = current.increase();
        if next != current {
            self.set_rate(next);
        }
    }

    /// Moves to the next slower rate preset, saturating at the slowest.
    pub fn decrease_rate(&mut self) {
        let current = self.rate();
        let next = current.decrease();
        if next != current {
            self.set_rate(next);
        }
    }

    /// Steps one frame forward, when stepping is available.
    pub fn step_forward(&mut self) {
        self.step(StepDirection::Forward);
    }

    /// Steps one frame backward, when stepping is available.
    pub fn step_backward(&mut self) {
        self.step(StepDirection::Backward);
    }

    fn step(&mut self, direction: StepDirection) {
        if !self.affordances().can_step {
            return;
        }
        self.surface.step_frame(direction);
    }

    /// Captures the currently displayed frame through `sink`.
    ///
    /// Refused without a session ([`Error::NoSession`]) and while the
    /// surface is running ([`Error::NotCapturable`]); the surface not
    /// having a frame yet is [`Error::FrameUnavailable`].
    pub fn capture_frame(&mut self, sink: &dyn FrameSink) -> Result<PathBuf> {
        if self.session.is_none() {
            return Err(Error::NoSession);
        }
        if !self.affordances().can_capture {
            return Err(Error::NotCapturable);
        }
        let frame = self.surface.grab_frame().ok_or(Error::FrameUnavailable)?;
        let path = sink.save(&frame)?;
        self.log.record(PlayerEvent::FrameCaptured {
            path: path.display().to_string(),
        });
        Ok(path)
    }

    /// Flips fullscreen through the host port and returns the new
    /// state. Without a session the host state is reported unchanged.
    pub fn toggle_fullscreen(&self, host: &mut dyn FullscreenHost) -> bool {
        if self.session.is_some() {
            host.toggle()
        } else {
            host.is_fullscreen()
        }
    }

    /// Tears the whole session down and returns to Idle.
    ///
    /// Pauses the surface (idempotent), aborts any ticker, zeroes the
    /// position, restores the default rate, and leaves fullscreen if it
    /// is engaged.
    ///
    /// State transitions:
    /// - any mode -> Idle
    pub fn reset(&mut self, fullscreen: &mut dyn FullscreenHost) {
        self.surface.pause();
        self.stop_ticker();
        self.gesture = None;
        self.surface.set_position_secs(0.0);
        self.surface.set_playback_rate(DEFAULT_RATE);
        if fullscreen.is_fullscreen() {
            fullscreen.exit();
        }
        self.session = None;
        self.probe_status = None;
        self.mode = PlaybackMode::Idle;
        self.log.record(PlayerEvent::SessionReset);
    }

    /// Handles one tick from the poll channel.
    ///
    /// Returns the refreshed display, or `None` when the tick is stale
    /// (its generation does not match the live ticker) or the mode is
    /// no longer Playing.
    pub fn poll_tick(&self, tick: Tick) -> Option<PositionDisplay> {
        let live = self
            .ticker
            .as_ref()
            .is_some_and(|ticker| ticker.generation() == tick.generation);
        if !live || !self.mode.is_playing() {
            return None;
        }
        Some(self.position_display())
    }

    /// Surface callback: the media duration became known (or changed).
    ///
    /// Records it into the session and returns the text for the
    /// duration readout.
    pub fn on_duration_known(&mut self) -> String {
        if let (Some(session), Some(duration)) =
            (self.session.as_mut(), self.surface.duration_secs())
        {
            session.record_duration(duration);
        }
        self.duration_text()
    }

    /// Host callback: the diagnostic probe for the current source
    /// finished with `status`. Stored for the next fault
    /// classification.
    pub fn on_probe_status(&mut self, status: u16) {
        self.probe_status = Some(status);
    }

    /// Surface callback: the media element raised an error with
    /// `raw_code`.
    ///
    /// Classifies it against the stored probe status and returns the
    /// category; the bilingual message, if the category has one, is
    /// reachable through [`FaultCategory::message`]. The mode is left
    /// alone: showing the fault is the host's concern, and the user can
    /// still load a different source.
    pub fn on_media_error(&mut self, raw_code: u8) -> FaultCategory {
        let category = fault::classify(SurfaceErrorCode::from_raw(raw_code), self.probe_status);
        self.log.record(PlayerEvent::FaultReported { category });
        category
    }

    /// Current mode of the state machine.
    #[must_use]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// The attached media session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&MediaSession> {
        self.session.as_ref()
    }

    /// Display name of the attached media, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.session.as_ref().map(MediaSession::file_name)
    }

    /// Current playback rate (default when no session is attached).
    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.session
            .as_ref()
            .map(|session| session.rate())
            .unwrap_or_default()
    }

    /// Which controls are operable right now.
    #[must_use]
    pub fn affordances(&self) -> ControlAffordances {
        let halted_with_media = !self.mode.is_idle() && !self.mode.is_playing();
        ControlAffordances {
            can_step: halted_with_media,
            can_capture: halted_with_media,
        }
    }

    /// Fresh display snapshot from the surface's live position.
    #[must_use]
    pub fn position_display(&self) -> PositionDisplay {
        PositionDisplay::new(self.surface.position_secs(), self.surface.duration_secs())
    }

    /// Text for the duration readout: the formatted duration once
    /// known, a placeholder before that.
    #[must_use]
    pub fn duration_text(&self) -> String {
        match self.session.as_ref().and_then(MediaSession::duration_secs) {
            Some(duration) => timestamp::format(duration),
            None => timestamp::PLACEHOLDER.to_owned(),
        }
    }

    /// The recent session events.
    #[must_use]
    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// The controlled surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the controlled surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn start_ticker(&mut self) {
        self.stop_ticker();
        self.ticker_generation += 1;
        self.ticker = Some(TickerHandle::spawn(
            self.ticker_generation,
            self.tick_tx.clone(),
        ));
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

/// The position a gesture commits: the pending target when one was
/// recorded and is finite, position zero otherwise.
fn seek_target(gesture: &SeekGesture) -> f64 {
    gesture
        .pending_secs
        .filter(|secs| secs.is_finite())
        .unwrap_or(0.0)
}
