// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interfaces the host implements and the
//! engine drives. The traits use only crate-local types, so the engine
//! stays independent of any particular rendering or windowing stack.
//!
//! # Available Ports
//!
//! - [`surface`]: the media rendering surface being controlled
//! - [`sink`]: the destination captured frames are written to
//! - [`fullscreen`]: the host's fullscreen toggle
//!
//! # Design Notes
//!
//! - Surface methods are infallible; the real surface raises failures
//!   through its error event, which the host feeds back as an error code
//! - No `async fn` - the host's event loop drives the engine directly

pub mod fullscreen;
pub mod sink;
pub mod surface;

// Re-export main types for convenience
pub use fullscreen::FullscreenHost;
pub use sink::FrameSink;
pub use surface::{MediaSurface, RgbaFrame, StepDirection};
