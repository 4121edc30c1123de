//! Supported puzzle languages
//!
//! Each language owns its alphabet: ASCII `a-z` plus the accented letters that
//! appear in its dictionary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the game can be played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (`en`)
    En,
    /// French (`fr`)
    Fr,
}

/// Accented letters accepted in English loanwords (cafe, naive, fiance...)
const ENGLISH_ACCENTS: &str = "àáâãäåçèéêëìíîïñòóôõöùúûüýÿ";

/// Accented letters of French orthography, including the ligatures
const FRENCH_ACCENTS: &str = "àâæçéèêëîïôœùûüÿ";

impl Language {
    /// Every supported language, in code order
    pub const ALL: [Self; 2] = [Self::En, Self::Fr];

    /// Two-letter language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Accented lowercase letters allowed on top of ASCII `a-z`
    #[must_use]
    pub const fn accented_letters(self) -> &'static str {
        match self {
            Self::En => ENGLISH_ACCENTS,
            Self::Fr => FRENCH_ACCENTS,
        }
    }

    /// Check whether a single lowercase character belongs to this language's alphabet
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        c.is_ascii_lowercase() || self.accented_letters().contains(c)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown language code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language '{}' (expected one of: en, fr)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "fr" | "french" | "français" => Ok(Self::Fr),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("FR".parse::<Language>(), Ok(Language::Fr));
        assert_eq!(" french ".parse::<Language>(), Ok(Language::Fr));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>(), Ok(language));
        }
    }

    #[test]
    fn alphabets_are_language_specific() {
        assert!(Language::En.accepts('a'));
        assert!(Language::En.accepts('é'));
        assert!(!Language::En.accepts('œ'));
        assert!(Language::Fr.accepts('œ'));
        assert!(!Language::Fr.accepts('ñ'));
        assert!(!Language::Fr.accepts('A')); // callers lowercase first
        assert!(!Language::En.accepts('-'));
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Fr).unwrap(), "\"fr\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
