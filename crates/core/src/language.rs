//! Language detection for incoming questions
//!
//! The dashboard answers in the language it was asked in: Arabic script,
//! Franco-Arabic (Arabic transliterated into Latin letters with digit
//! substitutions like 3=ع, 7=ح, 2=أ), or English. Detection is a single
//! lexical scan per query; no external models.

use serde::{Deserialize, Serialize};

/// Franco-Arabic marker substrings
///
/// Common transliterated function words; matched against the lowercased
/// utterance. "el " and "ay " keep their trailing space so English words
/// like "else" do not trip them.
const FRANCO_MARKERS: &[&str] = &["meen", "kam", "ay ", "el ", "eh "];

/// Digits used as letter substitutes in Franco-Arabic
const FRANCO_DIGITS: &[char] = &['2', '3', '5', '6', '7', '8', '9'];

/// Result of the lexical language scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageFlags {
    /// Any code point in the Arabic Unicode block (U+0600..=U+06FF)
    pub has_arabic_script: bool,
    /// Franco-Arabic transliteration detected
    pub is_franco: bool,
}

impl LanguageFlags {
    /// Scan an utterance once
    ///
    /// Franco detection requires a substitution digit directly followed by
    /// an ASCII letter ("3aez", "a3la", "me7tag") or one of the fixed
    /// marker words. A bare digit next to nothing, or trailing digits in an
    /// opaque token like "xyz123", does not count.
    pub fn detect(utterance: &str) -> Self {
        let has_arabic_script = utterance
            .chars()
            .any(|c| ('\u{0600}'..='\u{06FF}').contains(&c));

        let lowered = utterance.to_lowercase();

        let digit_substitution = lowered
            .chars()
            .zip(lowered.chars().skip(1))
            .any(|(a, b)| FRANCO_DIGITS.contains(&a) && b.is_ascii_alphabetic());

        let is_franco =
            digit_substitution || FRANCO_MARKERS.iter().any(|m| lowered.contains(m));

        Self {
            has_arabic_script,
            is_franco,
        }
    }
}

/// Language a response is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLanguage {
    Arabic,
    Franco,
    English,
}

impl ResponseLanguage {
    /// Fixed precedence: Arabic script > Franco > English
    ///
    /// Every rule selects its template through this, never through the raw
    /// flags, so an utterance mixing Arabic script with Franco markers is
    /// always answered in Arabic.
    pub fn select(flags: LanguageFlags) -> Self {
        if flags.has_arabic_script {
            Self::Arabic
        } else if flags.is_franco {
            Self::Franco
        } else {
            Self::English
        }
    }

    /// All response languages
    pub fn all() -> &'static [ResponseLanguage] {
        &[Self::Arabic, Self::Franco, Self::English]
    }
}
