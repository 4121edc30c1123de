//! Guess validation gate
//!
//! Checks run in a fixed order and stop at the first failure: length, then
//! alphabet, then dictionary membership.

use crate::core::{char_len, fold, is_in_alphabet};
use crate::wordlists::DictionaryIndex;
use std::fmt;

/// Why a guess was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    WordLength { expected: usize, actual: usize },
    InvalidCharacters,
    NotInWordList,
}

impl Rejection {
    /// Stable reason key for API consumers
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::WordLength { .. } => "wordLength",
            Self::InvalidCharacters => "invalidCharacters",
            Self::NotInWordList => "notInWordList",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLength { expected, actual } => {
                write!(f, "guess must be {expected} letters, got {actual}")
            }
            Self::InvalidCharacters => write!(f, "guess contains characters outside the alphabet"),
            Self::NotInWordList => write!(f, "not in word list"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Validate a raw guess against the current word length and a dictionary
///
/// Returns the folded (composed, lowercase) guess on success.
///
/// # Errors
/// The first failing check, in order: `WordLength`, `InvalidCharacters`, `NotInWordList`.
///
/// # Examples
/// ```
/// use lexic::core::Language;
/// use lexic::game::{Rejection, validate_guess};
/// use lexic::wordlists::DictionaryIndex;
///
/// let index = DictionaryIndex::build(Language::En, &["crane", "slate"]);
/// assert_eq!(validate_guess("CRANE", 5, &index).as_deref(), Ok("crane"));
/// assert_eq!(validate_guess("zzzzz", 5, &index), Err(Rejection::NotInWordList));
/// ```
pub fn validate_guess(
    guess: &str,
    expected_length: usize,
    index: &DictionaryIndex,
) -> Result<String, Rejection> {
    let folded = fold(guess.trim());
    let actual = char_len(&folded);

    if actual != expected_length {
        return Err(Rejection::WordLength {
            expected: expected_length,
            actual,
        });
    }
    if !is_in_alphabet(&folded, index.language()) {
        return Err(Rejection::InvalidCharacters);
    }
    if !index.contains(&folded) {
        return Err(Rejection::NotInWordList);
    }
    Ok(folded)
}
