//! Word representation and accent normalization
//!
//! A [`Word`] is a dictionary entry: lowercase, within the playable length range,
//! and spelled only with its language's alphabet. It carries its accent-stripped
//! form so comparisons never have to re-normalize.

use super::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Shortest playable word, in characters
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest playable word, in characters
pub const MAX_WORD_LENGTH: usize = 8;

/// Compose and lowercase a raw input string
///
/// Composition first means `e` + combining acute and the precomposed `é` both count
/// as one character.
#[must_use]
pub fn fold(input: &str) -> String {
    input.nfc().collect::<String>().to_lowercase()
}

/// Lowercase and strip diacritics
///
/// Decomposes every character and drops the combining marks, so `ÉCOLE` and
/// `ecole` normalize to the same string. Letters without a decomposition
/// (`œ`, `æ`) are kept as they are.
///
/// # Examples
/// ```
/// use lexic::core::normalize;
///
/// assert_eq!(normalize("ÉCOLE"), "ecole");
/// assert_eq!(normalize("Forêt"), "foret");
/// assert_eq!(normalize("cœur"), "cœur");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect()
}

/// Number of characters (not bytes) in an already folded word
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Check that a folded word is non-empty and spelled with the language's alphabet
#[must_use]
pub fn is_in_alphabet(word: &str, language: Language) -> bool {
    !word.is_empty() && word.chars().all(|c| language.accepts(c))
}

/// A playable dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    text: String,
    normalized: String,
    len: usize,
}

/// Error type for words that cannot enter a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Word must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, got {len}"
            ),
            Self::InvalidCharacters => write!(f, "Word contains characters outside the alphabet"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word for a language
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside `MIN_WORD_LENGTH..=MAX_WORD_LENGTH`
    /// - Contains characters outside the language's alphabet
    ///
    /// # Examples
    /// ```
    /// use lexic::core::{Language, Word};
    ///
    /// let word = Word::new("École", Language::Fr).unwrap();
    /// assert_eq!(word.text(), "école");
    /// assert_eq!(word.normalized(), "ecole");
    ///
    /// assert!(Word::new("cat", Language::En).is_err());
    /// assert!(Word::new("don't", Language::En).is_err());
    /// ```
    pub fn new(text: &str, language: Language) -> Result<Self, WordError> {
        let text = fold(text);
        let len = char_len(&text);

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&len) {
            return Err(WordError::InvalidLength(len));
        }

        if !is_in_alphabet(&text, language) {
            return Err(WordError::InvalidCharacters);
        }

        let normalized = normalize(&text);
        Ok(Self {
            text,
            normalized,
            len,
        })
    }

    /// Get the word as stored (lowercase, accents kept)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the accent-stripped form used for comparisons
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: a word has at least `MIN_WORD_LENGTH` characters
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First letter, as stored
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Check whether a raw guess matches this word, ignoring case and accents
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        normalize(guess) == self.normalized
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
