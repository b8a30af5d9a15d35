// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations for the capabilities the engine consumes
//! through ports, built on ecosystem crates:
//!
//! - [`http_probe`]: diagnostic source probe via `reqwest`
//! - [`disk_sink`]: PNG frame sink via the `image` crate (implements
//!   [`FrameSink`])
//!
//! The rendering surface and the fullscreen host have no adapter here;
//! they are inherently host-side and stay behind their ports.
//!
//! [`FrameSink`]: crate::port::FrameSink

pub mod disk_sink;
pub mod http_probe;

// Re-export main types for convenience
pub use disk_sink::DiskFrameSink;
pub use http_probe::probe_source;
