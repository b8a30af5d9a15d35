// SPDX-License-Identifier: MPL-2.0
//! Position poll ticker.
//!
//! While the player is in the Playing mode exactly one ticker task is
//! live, sending a [`Tick`] down an unbounded channel at the fixed poll
//! cadence ([`crate::config::TICK_INTERVAL`]). Every ticker carries a
//! generation stamp; a tick whose generation does not match the live
//! ticker is stale and must be discarded by the receiver. This makes
//! pausing deterministic even when ticks are already queued in the
//! channel when the pause lands.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::config::TICK_INTERVAL;

/// One position refresh prompt from the ticker task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Generation of the ticker that produced this tick.
    pub generation: u64,
}

/// Owning handle to a live ticker task.
///
/// Dropping the handle aborts the task, so a replaced ticker can never
/// keep feeding the channel.
#[derive(Debug)]
pub struct TickerHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Spawns a ticker task that sends a [`Tick`] stamped with
    /// `generation` every poll interval until the receiver side of
    /// `tick_tx` is dropped or the task is aborted.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn(generation: u64, tick_tx: mpsc::UnboundedSender<Tick>) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tick_tx.send(Tick { generation }).is_err() {
                    // Receiver dropped, the host is gone
                    break;
                }
            }
        });

        Self { generation, task }
    }

    /// Generation stamp carried by every tick this task sends.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stops the ticker task. Safe to call more than once.
    pub fn abort(&self) {
        self.task.abort();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
