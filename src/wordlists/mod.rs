//! Word lists and dictionary indexes
//!
//! Provides embedded raw lists compiled into the binary and the per-language
//! [`DictionaryIndex`] built from them once at startup. Each language ships two
//! lists: curated secret candidates and a larger set of extra accepted guesses.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{
    ENGLISH, ENGLISH_ALLOWED, ENGLISH_ALLOWED_COUNT, ENGLISH_COUNT, FRENCH, FRENCH_ALLOWED,
    FRENCH_ALLOWED_COUNT, FRENCH_COUNT,
};
pub use index::DictionaryIndex;

use crate::core::Language;
use log::{info, warn};
use std::path::Path;

/// One dictionary index per supported language
///
/// Immutable after construction; share it behind an `Arc` across threads.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    english: DictionaryIndex,
    french: DictionaryIndex,
}

impl Dictionaries {
    /// Build every language from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        let build = |language| {
            DictionaryIndex::with_guesses(
                language,
                loader::embedded(language),
                loader::embedded_allowed(language),
            )
        };
        Self::from_indexes(build(Language::En), build(Language::Fr))
    }

    /// Build every language, preferring `<dir>/<code>.txt` over the embedded list
    ///
    /// A missing file falls back to the embedded list; an unreadable one is an error.
    /// Extra guesses come from `<dir>/<code>-allowed.txt` when present. A language
    /// whose secret list is overridden without an allowed file accepts only its own
    /// words, so a custom list is never mixed with the embedded vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a list file exists but cannot be read.
    pub fn load(dir: Option<&Path>) -> std::io::Result<Self> {
        let build = |language: Language| -> std::io::Result<DictionaryIndex> {
            let Some(dir) = dir else {
                return Ok(DictionaryIndex::with_guesses(
                    language,
                    loader::embedded(language),
                    loader::embedded_allowed(language),
                ));
            };

            let path = loader::list_path(dir, language);
            let answers = if path.exists() {
                let raw = loader::load_from_file(&path)?;
                info!("loaded {} raw {language} entries from {}", raw.len(), path.display());
                Some(raw)
            } else {
                warn!(
                    "no {} in {}, using embedded {language} list",
                    path.display(),
                    dir.display()
                );
                None
            };

            let allowed_path = loader::allowed_path(dir, language);
            let allowed = if allowed_path.exists() {
                let raw = loader::load_from_file(&allowed_path)?;
                info!(
                    "loaded {} extra {language} guesses from {}",
                    raw.len(),
                    allowed_path.display()
                );
                Some(raw)
            } else {
                None
            };

            Ok(match (answers, allowed) {
                (Some(answers), Some(allowed)) => {
                    DictionaryIndex::with_guesses(language, &answers, &allowed)
                }
                (Some(answers), None) => DictionaryIndex::build(language, &answers),
                (None, Some(allowed)) => {
                    DictionaryIndex::with_guesses(language, loader::embedded(language), &allowed)
                }
                (None, None) => DictionaryIndex::with_guesses(
                    language,
                    loader::embedded(language),
                    loader::embedded_allowed(language),
                ),
            })
        };

        Ok(Self::from_indexes(build(Language::En)?, build(Language::Fr)?))
    }

    /// Assemble from prebuilt indexes
    ///
    /// # Panics
    /// Panics if an index is passed in the wrong slot.
    #[must_use]
    pub fn from_indexes(english: DictionaryIndex, french: DictionaryIndex) -> Self {
        assert_eq!(english.language(), Language::En, "english slot");
        assert_eq!(french.language(), Language::Fr, "french slot");

        for index in [&english, &french] {
            info!(
                "{} dictionary: {} words across lengths {:?}, {} accepted guesses",
                index.language(),
                index.len(),
                index.lengths().collect::<Vec<_>>(),
                index.accepted_len()
            );
            if index.is_empty() {
                warn!("{} dictionary is empty; rounds in this language cannot start", index.language());
            }
        }

        Self { english, french }
    }

    /// Index for a language
    #[must_use]
    pub const fn get(&self, language: Language) -> &DictionaryIndex {
        match language {
            Language::En => &self.english,
            Language::Fr => &self.french,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

    #[test]
    fn english_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn french_count_matches_const() {
        assert_eq!(FRENCH.len(), FRENCH_COUNT);
    }

    #[test]
    fn embedded_dictionaries_respect_length_range() {
        let dictionaries = Dictionaries::embedded();
        for language in Language::ALL {
            let index = dictionaries.get(language);
            assert!(!index.is_empty(), "{language} dictionary is empty");
            for word in index.words() {
                assert!(
                    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()),
                    "'{word}' out of range"
                );
            }
        }
    }

    #[test]
    fn embedded_dictionaries_filter_raw_entries() {
        let dictionaries = Dictionaries::embedded();
        let english = dictionaries.get(Language::En);

        assert!(english.contains("crane"));
        assert!(english.contains("cafe")); // stored as "café"
        assert!(!english.contains("cat"));
        assert!(!english.contains("extraordinary"));
        assert!(!english.contains("don't"));
        assert!(english.len() < ENGLISH_COUNT);
    }

    #[test]
    fn embedded_dictionaries_cover_every_length() {
        let dictionaries = Dictionaries::embedded();
        for language in Language::ALL {
            let index = dictionaries.get(language);
            for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
                assert!(
                    !index.words_of_length(length).is_empty(),
                    "{language} has no {length}-letter words"
                );
            }
        }
    }

    #[test]
    fn french_dictionary_keeps_accents() {
        let dictionaries = Dictionaries::embedded();
        let french = dictionaries.get(Language::Fr);

        assert!(french.words().iter().any(|w| w.text() == "école"));
        assert!(french.contains("ecole"));
        assert!(french.contains("cœur"));
        // The ligature is a letter of its own, so "coeur" is a different word
        assert!(french.words().iter().any(|w| w.text() == "cœur"));
        assert!(!french.words().iter().any(|w| w.text() == "coeur"));
    }

    #[test]
    fn embedded_dictionaries_accept_common_words() {
        let dictionaries = Dictionaries::embedded();
        let english = dictionaries.get(Language::En);
        for word in ["water", "other", "which", "there", "words", "raise", "adieu"] {
            assert_eq!(
                crate::game::validate_guess(word, 5, english),
                Ok(word.to_string()),
                "'{word}' rejected"
            );
        }

        let french = dictionaries.get(Language::Fr);
        for word in ["maison", "chose", "monde", "jour"] {
            assert_eq!(
                crate::game::validate_guess(word, word.chars().count(), french),
                Ok(word.to_string()),
                "'{word}' rejected"
            );
        }
    }

    #[test]
    fn embedded_guess_vocabulary_is_realistic() {
        let dictionaries = Dictionaries::embedded();
        let english = dictionaries.get(Language::En);
        let french = dictionaries.get(Language::Fr);
        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            assert!(
                english.accepted_of_length(length) > 1000,
                "only {} English {length}-letter guesses",
                english.accepted_of_length(length)
            );
            let floor = if length == MIN_WORD_LENGTH { 800 } else { 1000 };
            assert!(
                french.accepted_of_length(length) > floor,
                "only {} French {length}-letter guesses",
                french.accepted_of_length(length)
            );
        }
    }

    #[test]
    fn extra_guesses_are_never_secrets() {
        let dictionaries = Dictionaries::embedded();
        let english = dictionaries.get(Language::En);
        assert!(english.accepted_len() > english.len());
        assert!(english.contains("adieu"));
        assert!(!english.words().iter().any(|w| w.text() == "adieu"));
    }

    #[test]
    fn load_without_dir_uses_embedded() {
        let loaded = Dictionaries::load(None).unwrap();
        let embedded = Dictionaries::embedded();
        assert_eq!(
            loaded.get(Language::En).len(),
            embedded.get(Language::En).len()
        );
    }

    #[test]
    fn load_prefers_override_files() {
        let dir = std::env::temp_dir().join(format!("lexic-lists-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("en.txt"), "crane\nslate\ncat\n").unwrap();

        let loaded = Dictionaries::load(Some(&dir)).unwrap();
        assert_eq!(loaded.get(Language::En).len(), 2);
        // Overridden without en-allowed.txt: only the file's own words
        assert_eq!(loaded.get(Language::En).accepted_len(), 2);
        assert!(!loaded.get(Language::En).contains("water"));
        // No fr.txt: embedded French list
        assert_eq!(
            loaded.get(Language::Fr).len(),
            Dictionaries::embedded().get(Language::Fr).len()
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reads_allowed_override() {
        let dir = std::env::temp_dir().join(format!("lexic-allowed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("en.txt"), "crane\nslate\n").unwrap();
        std::fs::write(dir.join("en-allowed.txt"), "# extra\nadieu\nwater\n").unwrap();

        let loaded = Dictionaries::load(Some(&dir)).unwrap();
        let english = loaded.get(Language::En);
        assert_eq!(english.len(), 2);
        assert_eq!(english.accepted_len(), 4);
        assert!(english.contains("adieu"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
