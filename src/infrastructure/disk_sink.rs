// SPDX-License-Identifier: MPL-2.0
//! Disk-backed frame sink.
//!
//! Writes captured frames into a directory as PNG files with a
//! date-stamped default name. Two captures on the same day overwrite
//! each other, matching the download naming of the interface this
//! engine drives.

use std::path::PathBuf;

use chrono::Local;
use image_rs::{ImageBuffer, ImageFormat, Rgba};

use crate::error::{Error, Result};
use crate::port::{FrameSink, RgbaFrame};

/// [`FrameSink`] that encodes frames as PNG files in a fixed directory.
#[derive(Debug, Clone)]
pub struct DiskFrameSink {
    directory: PathBuf,
}

impl DiskFrameSink {
    /// Creates a sink writing into `directory`. The directory is
    /// created on the first save if it does not exist yet.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory this sink writes into.
    #[must_use]
    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }
}

impl FrameSink for DiskFrameSink {
    fn save(&self, frame: &RgbaFrame) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(stamped_file_name());

        // Building the buffer clones the pixel data; `from_raw` needs
        // ownership and fails when the byte count does not match the
        // dimensions.
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(frame.width, frame.height, (*frame.rgba_data).clone())
                .ok_or_else(|| {
                    Error::Io("frame byte count does not match its dimensions".to_string())
                })?;

        img.save_with_format(&path, ImageFormat::Png)
            .map_err(|e| Error::Io(format!("failed to save frame: {e}")))?;

        Ok(path)
    }
}

/// Default capture file name: the local date, `Www Mmm DD YYYY.png`.
fn stamped_file_name() -> String {
    Local::now().format("%a %b %d %Y.png").to_string()
}
