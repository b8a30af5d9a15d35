// SPDX-License-Identifier: MPL-2.0
//! User-facing message catalog.
//!
//! Every message the engine can surface is a fixed English and Traditional
//! Chinese pair, shown together. The catalog is static data; callers pick
//! an entry by situation and render its lines as-is.

use std::fmt;

/// A user-facing message in both display languages.
///
/// Each message is a headline plus a remedial hint, with the English and
/// Traditional Chinese renderings always presented together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilingualMessage {
    /// English headline, e.g. `"! mp4 file not found !"`.
    pub headline_en: &'static str,
    /// Traditional Chinese headline.
    pub headline_zh: &'static str,
    /// English remedial hint.
    pub hint_en: &'static str,
    /// Traditional Chinese remedial hint.
    pub hint_zh: &'static str,
}

impl BilingualMessage {
    /// Returns the four display lines in presentation order:
    /// both headlines first, then both hints.
    #[must_use]
    pub fn lines(&self) -> [&'static str; 4] {
        [self.headline_en, self.headline_zh, self.hint_en, self.hint_zh]
    }
}

impl fmt::Display for BilingualMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n\n{}\n{}",
            self.headline_en, self.headline_zh, self.hint_en, self.hint_zh
        )
    }
}

/// Shown when the submitted URL fails syntactic validation.
pub const INVALID_URL: BilingualMessage = BilingualMessage {
    headline_en: "! mp4 url invalid !",
    headline_zh: "！mp4網址格式錯誤！",
    hint_en: "please enter an mp4 url",
    hint_zh: "請輸入正確的網址格式",
};

/// Shown when fetching the media over the network failed mid-transfer.
pub const NETWORK_FAILURE: BilingualMessage = BilingualMessage {
    headline_en: "! failed to fetch mp4 file !",
    headline_zh: "！mp4讀取失敗！",
    hint_en: "please check your network status",
    hint_zh: "請檢查連線狀態",
};

/// Shown when the media was fetched but could not be decoded.
pub const DECODE_FAILURE: BilingualMessage = BilingualMessage {
    headline_en: "! failed to decode mp4 file !",
    headline_zh: "！mp4解碼失敗！",
    hint_en: "please check your mp4 source",
    hint_zh: "請檢查影片來源",
};

/// Shown when the source URL resolved but the file does not exist.
pub const NOT_FOUND: BilingualMessage = BilingualMessage {
    headline_en: "! mp4 file not found !",
    headline_zh: "！找不到mp4！",
    hint_en: "please check your mp4 url",
    hint_zh: "請檢查影片網址",
};

/// Shown when the server refused access to the file.
pub const ACCESS_DENIED: BilingualMessage = BilingualMessage {
    headline_en: "! mp4 file access denied !",
    headline_zh: "！沒有權限讀取mp4！",
    hint_en: "please check your permission",
    hint_zh: "請檢查權限",
};

/// Shown when the source exists but is not a playable format.
pub const UNSUPPORTED_FORMAT: BilingualMessage = BilingualMessage {
    headline_en: "! mp4 file not supported !",
    headline_zh: "！不支援的mp4！",
    hint_en: "please check your mp4 source",
    hint_zh: "請檢查影片來源",
};

/// Shown for any failure outside the known categories.
pub const UNKNOWN_ERROR: BilingualMessage = BilingualMessage {
    headline_en: "! unknown error !",
    headline_zh: "！不知名錯誤！",
    hint_en: "please try again",
    hint_zh: "請再試一次",
};
