//! Length-indexed dictionary
//!
//! Built once per language at startup and shared read-only afterwards. Secret words
//! come from the indexed words; guesses are accepted from a wider set that always
//! includes them.

use crate::core::{Language, Word, normalize};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::ops::Range;

/// Dictionary for one language, grouped by word length
///
/// Words are stored in a single vector ordered by ascending length and, within a
/// length, by their position in the raw list. That order is the flattened order the
/// daily selector indexes into, so it must not depend on hashing.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    language: Language,
    words: Vec<Word>,
    buckets: BTreeMap<usize, Range<usize>>,
    /// Normalized forms accepted as guesses: every indexed word plus extra guesses
    accepted: FxHashSet<String>,
}

impl DictionaryIndex {
    /// Build an index from a raw word list
    ///
    /// Entries are kept iff their length is within the playable range and they are
    /// spelled with the language's alphabet (case-insensitively). Kept words are
    /// lowercased; exact duplicates keep their first occurrence. An empty result is
    /// not an error.
    ///
    /// # Examples
    /// ```
    /// use lexic::core::Language;
    /// use lexic::wordlists::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(Language::En, &["crane", "CAT", "Slate", "don't"]);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.contains("SLATE"));
    /// ```
    pub fn build<S: AsRef<str> + Sync>(language: Language, raw: &[S]) -> Self {
        Self::with_guesses::<S, &str>(language, raw, &[])
    }

    /// Build an index whose guess vocabulary is wider than its secret words
    ///
    /// `answers` become the indexed words, exactly as [`build`](Self::build) does.
    /// `guesses` go through the same length and alphabet filter but are only
    /// accepted by [`contains`](Self::contains), never selected.
    ///
    /// # Examples
    /// ```
    /// use lexic::core::Language;
    /// use lexic::wordlists::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::with_guesses(Language::En, &["crane"], &["adieu", "cat"]);
    /// assert_eq!(index.len(), 1);
    /// assert!(index.contains("adieu"));
    /// assert_eq!(index.accepted_len(), 2);
    /// ```
    pub fn with_guesses<S, G>(language: Language, answers: &[S], guesses: &[G]) -> Self
    where
        S: AsRef<str> + Sync,
        G: AsRef<str> + Sync,
    {
        let parsed: Vec<Option<Word>> = answers
            .par_iter()
            .map(|entry| Word::new(entry.as_ref().trim(), language).ok())
            .collect();

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut words: Vec<Word> = parsed
            .into_iter()
            .flatten()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        // Stable: insertion order survives within each length
        words.sort_by_key(Word::len);

        let mut buckets: BTreeMap<usize, Range<usize>> = BTreeMap::new();
        for (i, word) in words.iter().enumerate() {
            buckets
                .entry(word.len())
                .and_modify(|range| range.end = i + 1)
                .or_insert(i..i + 1);
        }

        let mut accepted: FxHashSet<String> = words
            .par_iter()
            .map(|word| word.normalized().to_string())
            .collect();
        accepted.par_extend(guesses.par_iter().filter_map(|entry| {
            Word::new(entry.as_ref().trim(), language)
                .ok()
                .map(|word| word.normalized().to_string())
        }));

        Self {
            language,
            words,
            buckets,
            accepted,
        }
    }

    /// Language of every word in this index
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// All words, flattened: ascending length, raw-list order within a length
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words of exactly `length` characters (empty if none)
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.buckets
            .get(&length)
            .map_or(&[], |range| &self.words[range.clone()])
    }

    /// Lengths that have at least one word, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    /// Check whether a word is an accepted guess, ignoring case and accents
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.accepted.contains(&normalize(word))
    }

    /// Number of distinct accepted guesses (by normalized form)
    #[must_use]
    pub fn accepted_len(&self) -> usize {
        self.accepted.len()
    }

    /// Number of distinct accepted guesses of exactly `length` characters
    #[must_use]
    pub fn accepted_of_length(&self, length: usize) -> usize {
        self.accepted
            .iter()
            .filter(|word| word.chars().count() == length)
            .count()
    }

    /// Total number of secret candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no raw entry survived filtering
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn filters_by_length_and_alphabet() {
        let index = DictionaryIndex::build(
            Language::En,
            &["cat", "crane", "extraordinary", "e-mail", "h2o", "don't", "tree"],
        );

        assert_eq!(texts(index.words()), vec!["tree", "crane"]);
    }

    #[test]
    fn lowercases_and_deduplicates() {
        let index = DictionaryIndex::build(Language::En, &["Crane", "crane", "CRANE", "slate"]);
        assert_eq!(texts(index.words()), vec!["crane", "slate"]);
    }

    #[test]
    fn groups_by_length_in_insertion_order() {
        let index = DictionaryIndex::build(
            Language::En,
            &["planet", "crane", "tree", "slate", "moon", "castle"],
        );

        assert_eq!(texts(index.words_of_length(4)), vec!["tree", "moon"]);
        assert_eq!(texts(index.words_of_length(5)), vec!["crane", "slate"]);
        assert_eq!(texts(index.words_of_length(6)), vec!["planet", "castle"]);
        assert!(index.words_of_length(7).is_empty());
        assert_eq!(index.lengths().collect::<Vec<_>>(), vec![4, 5, 6]);

        // Flattened order: ascending length, then insertion
        assert_eq!(
            texts(index.words()),
            vec!["tree", "moon", "crane", "slate", "planet", "castle"]
        );
    }

    #[test]
    fn contains_is_accent_insensitive() {
        let index = DictionaryIndex::build(Language::Fr, &["école", "forêt", "maison"]);

        assert!(index.contains("école"));
        assert!(index.contains("ecole"));
        assert!(index.contains("ECOLE"));
        assert!(index.contains("foret"));
        assert!(!index.contains("jardin"));
    }

    #[test]
    fn keeps_language_specific_letters() {
        let french = DictionaryIndex::build(Language::Fr, &["cœur", "sœur", "niño"]);
        assert_eq!(texts(french.words()), vec!["cœur", "sœur"]);

        let english = DictionaryIndex::build(Language::En, &["cœur", "niño", "café"]);
        assert_eq!(texts(english.words()), vec!["niño", "café"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let index = DictionaryIndex::build(Language::En, &["a", "it", "cat"]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.words_of_length(5).is_empty());
        assert_eq!(index.language(), Language::En);
    }

    #[test]
    fn extra_guesses_are_accepted_but_never_indexed() {
        let index = DictionaryIndex::with_guesses(
            Language::En,
            &["crane", "slate"],
            &["adieu", "water", "crane", "cat", "cr4te"],
        );

        assert_eq!(texts(index.words()), vec!["crane", "slate"]);
        assert!(index.contains("adieu"));
        assert!(index.contains("WATER"));
        assert!(index.contains("slate"));
        assert!(!index.contains("cat"));
        assert!(!index.contains("cr4te"));
        // crane appears in both lists
        assert_eq!(index.accepted_len(), 4);
    }

    #[test]
    fn accepted_counts_by_length() {
        let index = DictionaryIndex::with_guesses(
            Language::Fr,
            &["école"],
            &["cœur", "ecole", "arbre", "maison"],
        );

        // "ecole" folds onto "école"
        assert_eq!(index.accepted_of_length(5), 2);
        assert_eq!(index.accepted_of_length(4), 1);
        assert_eq!(index.accepted_of_length(6), 1);
        assert_eq!(index.accepted_of_length(7), 0);
    }
}
