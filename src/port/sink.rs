// SPDX-License-Identifier: MPL-2.0
//! Frame sink port definition.
//!
//! A [`FrameSink`] is where captured frames end up: a file on disk, a
//! download the host offers the user, or a test double. The engine only
//! cares that the sink accepts a frame and reports where it went.

use std::path::PathBuf;

use crate::error::Result;
use crate::port::surface::RgbaFrame;

/// Port for persisting captured frames.
pub trait FrameSink {
    /// Writes the frame and returns the path it was written to.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn save(&self, frame: &RgbaFrame) -> Result<PathBuf>;
}
