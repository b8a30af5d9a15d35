// SPDX-License-Identifier: MPL-2.0
//! `playhead` is the playback synchronization and seek engine for a single
//! streamed MP4 source.
//!
//! It drives a host-provided rendering surface through port traits: transport
//! with a generation-stamped 25 Hz position poll loop, seek gestures with
//! tolerance-gated preview, discrete rate presets, frame capture, syntactic
//! source-URL validation, and bilingual fault classification.

#![doc(html_root_url = "https://docs.rs/playhead/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fault;
pub mod infrastructure;
pub mod messages;
pub mod player;
pub mod port;
pub mod rate;
pub mod seekbar;
pub mod session;
pub mod source_url;
pub mod timestamp;

#[cfg(test)]
pub mod test_utils;
