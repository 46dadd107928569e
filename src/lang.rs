//! Language code collaborator for language detection results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a detector can report.
///
/// A small ISO 639-1 subset; detectors that work with a wider inventory map
/// anything else to [`LanguageCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum LanguageCode {
    /// English
    English,
    /// German
    German,
    /// French
    French,
    /// Spanish
    Spanish,
    /// Italian
    Italian,
    /// Portuguese
    Portuguese,
    /// Russian
    Russian,
    /// Chinese (Simplified/Traditional)
    Chinese,
    /// Japanese
    Japanese,
    /// Korean
    Korean,
    /// Arabic
    Arabic,
    /// Hebrew
    Hebrew,
    /// Undetermined or out-of-inventory language
    Unknown,
}

impl LanguageCode {
    /// ISO 639-1 code for this language (`"und"` for unknown).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::German => "de",
            LanguageCode::French => "fr",
            LanguageCode::Spanish => "es",
            LanguageCode::Italian => "it",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Russian => "ru",
            LanguageCode::Chinese => "zh",
            LanguageCode::Japanese => "ja",
            LanguageCode::Korean => "ko",
            LanguageCode::Arabic => "ar",
            LanguageCode::Hebrew => "he",
            LanguageCode::Unknown => "und",
        }
    }

    /// Returns true for CJK (Chinese, Japanese, Korean) languages.
    #[must_use]
    pub const fn is_cjk(&self) -> bool {
        matches!(
            self,
            LanguageCode::Chinese | LanguageCode::Japanese | LanguageCode::Korean
        )
    }

    /// Returns true for right-to-left languages.
    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self, LanguageCode::Arabic | LanguageCode::Hebrew)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "en" | "eng" => LanguageCode::English,
            "de" | "deu" | "ger" => LanguageCode::German,
            "fr" | "fra" | "fre" => LanguageCode::French,
            "es" | "spa" => LanguageCode::Spanish,
            "it" | "ita" => LanguageCode::Italian,
            "pt" | "por" => LanguageCode::Portuguese,
            "ru" | "rus" => LanguageCode::Russian,
            "zh" | "zho" | "chi" => LanguageCode::Chinese,
            "ja" | "jpn" => LanguageCode::Japanese,
            "ko" | "kor" => LanguageCode::Korean,
            "ar" | "ara" => LanguageCode::Arabic,
            "he" | "heb" => LanguageCode::Hebrew,
            _ => LanguageCode::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for lang in [
            LanguageCode::English,
            LanguageCode::Japanese,
            LanguageCode::Arabic,
        ] {
            let parsed: LanguageCode = lang.code().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn unknown_codes_parse_to_unknown() {
        let parsed: LanguageCode = "xx".parse().unwrap();
        assert_eq!(parsed, LanguageCode::Unknown);
        assert_eq!(parsed.code(), "und");
    }

    #[test]
    fn predicates() {
        assert!(LanguageCode::Japanese.is_cjk());
        assert!(!LanguageCode::German.is_cjk());
        assert!(LanguageCode::Hebrew.is_rtl());
        assert!(!LanguageCode::English.is_rtl());
    }
}
