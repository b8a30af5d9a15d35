// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::messages::{self, BilingualMessage};
use crate::source_url::UrlRejection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Writing a captured frame to disk failed.
    Io(String),

    /// The submitted source URL failed syntactic validation.
    InvalidUrl(UrlRejection),

    /// A session is already attached; a new source is only taken from
    /// the reset state.
    SessionActive,

    /// The operation needs a loaded media session and none exists.
    NoSession,

    /// Frame capture was requested while the engine disallows it
    /// (captures are only taken from a paused or never-started surface).
    NotCapturable,

    /// The surface could not hand over a frame to capture.
    FrameUnavailable,
}

impl Error {
    /// Returns the catalog message to show the user for this error, if
    /// it has one. Internal errors render through `Display` instead.
    #[must_use]
    pub fn user_message(&self) -> Option<&'static BilingualMessage> {
        match self {
            Error::InvalidUrl(_) => Some(&messages::INVALID_URL),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::InvalidUrl(reason) => write!(f, "Invalid URL: {}", reason),
            Error::SessionActive => write!(f, "A media session is already loaded"),
            Error::NoSession => write!(f, "No media session is loaded"),
            Error::NotCapturable => write!(f, "Frame capture is not available while playing"),
            Error::FrameUnavailable => write!(f, "No frame is available to capture"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<UrlRejection> for Error {
    fn from(reason: UrlRejection) -> Self {
        Error::InvalidUrl(reason)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_rejection_produces_invalid_url_variant() {
        let err: Error = UrlRejection::SchemeNotHttp.into();
        assert_eq!(err, Error::InvalidUrl(UrlRejection::SchemeNotHttp));
        assert!(format!("{}", err).contains("scheme must be http or https"));
    }

    #[test]
    fn invalid_url_carries_the_catalog_message() {
        let err = Error::InvalidUrl(UrlRejection::NotMp4File);
        assert_eq!(err.user_message(), Some(&messages::INVALID_URL));
    }

    #[test]
    fn internal_errors_have_no_catalog_message() {
        assert!(Error::SessionActive.user_message().is_none());
        assert!(Error::NoSession.user_message().is_none());
        assert!(Error::NotCapturable.user_message().is_none());
    }
}
