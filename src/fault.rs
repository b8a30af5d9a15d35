// SPDX-License-Identifier: MPL-2.0
//! Classification of media load and playback failures.
//!
//! The surface reports failures as a small numeric error code; for the
//! source-not-supported code, the transport status of a diagnostic probe
//! against the same URL refines the verdict (a 404 means the file is
//! missing, not malformed). Each category maps to at most one static
//! user-facing message.

use serde::{Deserialize, Serialize};

use crate::messages::{self, BilingualMessage};

/// Error code reported by the media surface, mirroring the HTML media
/// element numbering (1 through 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceErrorCode {
    /// The fetch was aborted at the user's request.
    Aborted,
    /// A network failure interrupted the fetch.
    Network,
    /// The media arrived but decoding it failed.
    Decode,
    /// The source is not a supported media resource.
    Unsupported,
}

impl SurfaceErrorCode {
    /// Maps a raw surface error code to the known set.
    ///
    /// Returns `None` for codes outside 1..=4; those classify as
    /// [`FaultCategory::Unknown`].
    #[must_use]
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(SurfaceErrorCode::Aborted),
            2 => Some(SurfaceErrorCode::Network),
            3 => Some(SurfaceErrorCode::Decode),
            4 => Some(SurfaceErrorCode::Unsupported),
            _ => None,
        }
    }
}

/// What went wrong, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultCategory {
    /// A deliberate abort. Nothing is shown.
    Silent,
    /// The file could not be fetched over the network.
    NetworkFailure,
    /// The file was fetched but could not be decoded.
    DecodeFailure,
    /// The server says the file does not exist.
    NotFound,
    /// The server refused access to the file.
    AccessDenied,
    /// The file exists but is not a playable format.
    UnsupportedFormat,
    /// Anything outside the known codes.
    Unknown,
}

impl FaultCategory {
    /// Returns the user-facing message for this category, or `None` when
    /// nothing should be shown.
    #[must_use]
    pub fn message(self) -> Option<&'static BilingualMessage> {
        match self {
            FaultCategory::Silent => None,
            FaultCategory::NetworkFailure => Some(&messages::NETWORK_FAILURE),
            FaultCategory::DecodeFailure => Some(&messages::DECODE_FAILURE),
            FaultCategory::NotFound => Some(&messages::NOT_FOUND),
            FaultCategory::AccessDenied => Some(&messages::ACCESS_DENIED),
            FaultCategory::UnsupportedFormat => Some(&messages::UNSUPPORTED_FORMAT),
            FaultCategory::Unknown => Some(&messages::UNKNOWN_ERROR),
        }
    }
}

/// Classifies a surface failure, refined by the diagnostic probe's
/// transport status where the code alone is ambiguous.
///
/// A missing or failed probe (`transport_status == None`) falls through
/// to the generic unsupported-format verdict.
#[must_use]
pub fn classify(
    code: Option<SurfaceErrorCode>,
    transport_status: Option<u16>,
) -> FaultCategory {
    match code {
        None => FaultCategory::Unknown,
        Some(SurfaceErrorCode::Aborted) => FaultCategory::Silent,
        Some(SurfaceErrorCode::Network) => FaultCategory::NetworkFailure,
        Some(SurfaceErrorCode::Decode) => FaultCategory::DecodeFailure,
        Some(SurfaceErrorCode::Unsupported) => match transport_status {
            Some(404) => FaultCategory::NotFound,
            Some(403) => FaultCategory::AccessDenied,
            _ => FaultCategory::UnsupportedFormat,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_maps_the_known_codes() {
        assert_eq!(SurfaceErrorCode::from_raw(1), Some(SurfaceErrorCode::Aborted));
        assert_eq!(SurfaceErrorCode::from_raw(2), Some(SurfaceErrorCode::Network));
        assert_eq!(SurfaceErrorCode::from_raw(3), Some(SurfaceErrorCode::Decode));
        assert_eq!(
            SurfaceErrorCode::from_raw(4),
            Some(SurfaceErrorCode::Unsupported)
        );
    }

    #[test]
    fn from_raw_rejects_codes_outside_the_set() {
        assert_eq!(SurfaceErrorCode::from_raw(0), None);
        assert_eq!(SurfaceErrorCode::from_raw(5), None);
        assert_eq!(SurfaceErrorCode::from_raw(255), None);
    }

    #[test]
    fn abort_classifies_silent() {
        let category = classify(Some(SurfaceErrorCode::Aborted), Some(200));
        assert_eq!(category, FaultCategory::Silent);
        assert!(category.message().is_none());
    }

    #[test]
    fn network_and_decode_ignore_the_probe_status() {
        assert_eq!(
            classify(Some(SurfaceErrorCode::Network), Some(404)),
            FaultCategory::NetworkFailure
        );
        assert_eq!(
            classify(Some(SurfaceErrorCode::Decode), Some(403)),
            FaultCategory::DecodeFailure
        );
    }

    #[test]
    fn unsupported_with_404_means_not_found() {
        assert_eq!(
            classify(Some(SurfaceErrorCode::Unsupported), Some(404)),
            FaultCategory::NotFound
        );
    }

    #[test]
    fn unsupported_with_403_means_access_denied() {
        assert_eq!(
            classify(Some(SurfaceErrorCode::Unsupported), Some(403)),
            FaultCategory::AccessDenied
        );
    }

    #[test]
    fn unsupported_with_other_or_missing_status_stays_generic() {
        assert_eq!(
            classify(Some(SurfaceErrorCode::Unsupported), Some(200)),
            FaultCategory::UnsupportedFormat
        );
        assert_eq!(
            classify(Some(SurfaceErrorCode::Unsupported), None),
            FaultCategory::UnsupportedFormat
        );
    }

    #[test]
    fn unknown_codes_classify_unknown() {
        assert_eq!(classify(None, Some(200)), FaultCategory::Unknown);
        assert_eq!(classify(None, None), FaultCategory::Unknown);
    }

    #[test]
    fn categories_carry_their_catalog_messages() {
        assert_eq!(
            FaultCategory::NotFound.message(),
            Some(&messages::NOT_FOUND)
        );
        assert_eq!(
            FaultCategory::Unknown.message(),
            Some(&messages::UNKNOWN_ERROR)
        );
    }

    #[test]
    fn fault_category_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&FaultCategory::NotFound).unwrap(),
            "\"not_found\""
        );
        assert_eq!(
            serde_json::to_string(&FaultCategory::UnsupportedFormat).unwrap(),
            "\"unsupported_format\""
        );
    }

    #[test]
    fn fault_category_deserializes_from_snake_case() {
        assert_eq!(
            serde_json::from_str::<FaultCategory>("\"access_denied\"").unwrap(),
            FaultCategory::AccessDenied
        );
    }
}
