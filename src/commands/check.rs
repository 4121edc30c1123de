//! Run the validation gate on a single word

use crate::core::{Language, char_len, fold, normalize};
use crate::game::{Rejection, validate_guess};
use crate::wordlists::Dictionaries;

/// Result of checking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub language: Language,
    pub expected_length: usize,
    /// Folded word on success, the first failing check otherwise
    pub verdict: Result<String, Rejection>,
}

impl CheckResult {
    /// Accent-stripped form of the checked word
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize(&self.word)
    }
}

/// Validate `word` as a guess in `language`
///
/// Without an explicit `length` the word's own length is expected, so only the
/// alphabet and dictionary checks can fail.
#[must_use]
pub fn check_word(
    word: &str,
    language: Language,
    length: Option<usize>,
    dictionaries: &Dictionaries,
) -> CheckResult {
    let expected_length = length.unwrap_or_else(|| char_len(&fold(word.trim())));
    CheckResult {
        word: word.trim().to_string(),
        language,
        expected_length,
        verdict: validate_guess(word, expected_length, dictionaries.get(language)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_word_passes() {
        let dictionaries = Dictionaries::embedded();
        let result = check_word("Crane", Language::En, None, &dictionaries);
        assert_eq!(result.expected_length, 5);
        assert_eq!(result.verdict, Ok("crane".to_string()));
    }

    #[test]
    fn explicit_length_is_checked_first() {
        let dictionaries = Dictionaries::embedded();
        let result = check_word("h2o", Language::En, Some(5), &dictionaries);
        assert_eq!(
            result.verdict,
            Err(Rejection::WordLength {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn french_word_without_accents() {
        let dictionaries = Dictionaries::embedded();
        let result = check_word("ecole", Language::Fr, None, &dictionaries);
        assert!(result.verdict.is_ok());
        assert_eq!(result.normalized(), "ecole");

        let english = check_word("cœur", Language::En, None, &dictionaries);
        assert_eq!(english.verdict, Err(Rejection::InvalidCharacters));
    }
}
