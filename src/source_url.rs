// SPDX-License-Identifier: MPL-2.0
//! Syntactic validation of user-submitted MP4 source URLs.
//!
//! This is a gate on the URL's shape only; whether anything playable
//! lives at the address is discovered later by the media surface. The
//! input is lowercased before parsing, so scheme, host, and the `.mp4`
//! extension are all matched case-insensitively.

use std::fmt;

use url::Url;

/// Longest hostname accepted, in characters.
pub const MAX_HOST_LEN: usize = 255;

/// Longest single hostname label accepted, in characters.
pub const MAX_LABEL_LEN: usize = 63;

/// Why a submitted URL was refused.
///
/// The variants follow the order the checks run in; validation stops at
/// the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRejection {
    /// The string does not parse as an absolute URL at all.
    Unparsable,
    /// Parsed, but the scheme is neither `http` nor `https`.
    SchemeNotHttp,
    /// The path does not name an `.mp4` file (wrong extension, or a bare
    /// `.mp4` with no file name in front of it).
    NotMp4File,
    /// The hostname exceeds [`MAX_HOST_LEN`] characters.
    HostTooLong,
    /// The hostname contains an empty label (`..`).
    HostEmptyLabel,
    /// The hostname contains a character that never appears in a valid
    /// one (`%` or `+`).
    HostForbiddenChar,
    /// A hostname label exceeds [`MAX_LABEL_LEN`] characters.
    LabelTooLong,
    /// A hostname label starts or ends with a hyphen.
    LabelHyphenEdge,
}

impl fmt::Display for UrlRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            UrlRejection::Unparsable => "not a parsable absolute url",
            UrlRejection::SchemeNotHttp => "scheme must be http or https",
            UrlRejection::NotMp4File => "path must name an .mp4 file",
            UrlRejection::HostTooLong => "hostname is too long",
            UrlRejection::HostEmptyLabel => "hostname contains an empty label",
            UrlRejection::HostForbiddenChar => "hostname contains a forbidden character",
            UrlRejection::LabelTooLong => "hostname label is too long",
            UrlRejection::LabelHyphenEdge => "hostname label starts or ends with a hyphen",
        };
        write!(f, "{reason}")
    }
}

/// Validates a raw URL string as an MP4 source address.
///
/// Returns the parsed (lowercased) URL on success so callers keep the
/// normalized form, or the first failed check.
pub fn validate(raw: &str) -> Result<Url, UrlRejection> {
    let lowered = raw.to_lowercase();
    let parsed = Url::parse(&lowered).map_err(|_| UrlRejection::Unparsable)?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(UrlRejection::SchemeNotHttp);
    }

    let path = parsed.path();
    if !path.ends_with(".mp4") || path.ends_with("/.mp4") {
        return Err(UrlRejection::NotMp4File);
    }

    let host = parsed.host_str().unwrap_or_default();
    if host.len() > MAX_HOST_LEN {
        return Err(UrlRejection::HostTooLong);
    }
    if host.contains("..") {
        return Err(UrlRejection::HostEmptyLabel);
    }
    if host.contains('%') || host.contains('+') {
        return Err(UrlRejection::HostForbiddenChar);
    }
    for label in host.split('.') {
        if label.len() > MAX_LABEL_LEN {
            return Err(UrlRejection::LabelTooLong);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(UrlRejection::LabelHyphenEdge);
        }
    }

    Ok(parsed)
}

/// Convenience accept/reject form of [`validate`].
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}
