// SPDX-License-Identifier: MPL-2.0
//! Playback state machine and position poll loop.
//!
//! - `mode`: the [`PlaybackMode`] enum and its predicates
//! - `state`: the [`Player`] coordinator itself
//! - `ticker`: the generation-stamped poll ticker task

pub mod mode;
pub mod state;
pub mod ticker;

pub use mode::PlaybackMode;
pub use state::{ControlAffordances, Player, PositionDisplay};
pub use ticker::{Tick, TickerHandle};
