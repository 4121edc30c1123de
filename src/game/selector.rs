//! Secret word selection
//!
//! Random rounds draw from the thread RNG. Daily rounds seed a ChaCha stream from
//! the UTC date, so every process on every platform picks the same words for the
//! same day and dictionary.

use crate::core::{Language, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
use crate::wordlists::DictionaryIndex;
use chrono::NaiveDate;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use std::fmt;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Error type for selection failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing to choose from (`length` is set when a specific bucket was empty)
    NoWordsAvailable {
        language: Language,
        length: Option<usize>,
    },
    /// Fewer unique words exist than the set needs
    SetExhausted {
        language: Language,
        requested: usize,
        found: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable {
                language,
                length: Some(length),
            } => write!(f, "no {length}-letter words available for {language}"),
            Self::NoWordsAvailable {
                language,
                length: None,
            } => write!(f, "no words available for {language}"),
            Self::SetExhausted {
                language,
                requested,
                found,
            } => write!(
                f,
                "daily set for {language} needs {requested} unique words, dictionary has {found}"
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Seed for one day's selection
///
/// FNV-1a over `lexic/<purpose>/<language>/<YYYYMMDD>`. The purpose keeps the daily
/// word and the daily set on independent streams.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use lexic::core::Language;
/// use lexic::game::day_seed;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(day_seed("word", Language::En, day), day_seed("word", Language::En, day));
/// assert_ne!(day_seed("word", Language::En, day), day_seed("set", Language::En, day));
/// ```
#[must_use]
pub fn day_seed(purpose: &str, language: Language, day: NaiveDate) -> u64 {
    let key = format!("lexic/{purpose}/{}/{}", language.code(), day.format("%Y%m%d"));
    fnv1a64(key.as_bytes())
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Picks secret words from one dictionary
#[derive(Debug, Clone, Copy)]
pub struct WordSelector<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> WordSelector<'a> {
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    /// Random word: uniform length in the playable range, then uniform within it
    ///
    /// # Errors
    /// `NoWordsAvailable` when the drawn length has no words.
    pub fn random_word(&self) -> Result<&'a Word, SelectionError> {
        self.random_word_with_rng(&mut rand::rng())
    }

    /// [`random_word`](Self::random_word) with a caller-supplied RNG
    ///
    /// # Errors
    /// `NoWordsAvailable` when the drawn length has no words.
    pub fn random_word_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&'a Word, SelectionError> {
        let length = rng.random_range(MIN_WORD_LENGTH..=MAX_WORD_LENGTH);
        self.index
            .words_of_length(length)
            .choose(rng)
            .ok_or(SelectionError::NoWordsAvailable {
                language: self.index.language(),
                length: Some(length),
            })
    }

    /// The word of the day
    ///
    /// One draw from the day-seeded stream over the flattened dictionary. Pure in
    /// `(language, dictionary, day)`.
    ///
    /// # Errors
    /// `NoWordsAvailable` for an empty dictionary.
    pub fn daily_word(&self, day: NaiveDate) -> Result<&'a Word, SelectionError> {
        let language = self.index.language();
        let words: &'a [Word] = self.index.words();
        if words.is_empty() {
            return Err(SelectionError::NoWordsAvailable {
                language,
                length: None,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(day_seed("word", language, day));
        Ok(&words[rng.random_range(0..words.len())])
    }

    /// The day's ordered set of up to `size` words with pairwise distinct normalized forms
    ///
    /// Shuffles the flattened dictionary with the day-seeded stream and keeps the
    /// first word of each normalized form. A dictionary with fewer than `size`
    /// distinct forms yields a short set; see [`require_daily_set`](Self::require_daily_set).
    #[must_use]
    pub fn daily_set(&self, day: NaiveDate, size: usize) -> Vec<&'a Word> {
        let words: &'a [Word] = self.index.words();
        let mut order: Vec<usize> = (0..words.len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(day_seed("set", self.index.language(), day));
        order.shuffle(&mut rng);

        let mut seen: FxHashSet<&'a str> = FxHashSet::default();
        order
            .into_iter()
            .map(|i| &words[i])
            .filter(|word| seen.insert(word.normalized()))
            .take(size)
            .collect()
    }

    /// [`daily_set`](Self::daily_set), treating a short set as a failure
    ///
    /// # Errors
    /// `NoWordsAvailable` for an empty dictionary, `SetExhausted` when fewer than
    /// `size` distinct forms exist.
    pub fn require_daily_set(
        &self,
        day: NaiveDate,
        size: usize,
    ) -> Result<Vec<&'a Word>, SelectionError> {
        let language = self.index.language();
        let set = self.daily_set(day, size);
        match set.len() {
            0 if size > 0 => Err(SelectionError::NoWordsAvailable {
                language,
                length: None,
            }),
            found if found < size => Err(SelectionError::SetExhausted {
                language,
                requested: size,
                found,
            }),
            _ => Ok(set),
        }
    }

    /// Dictionary this selector draws from
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &'a DictionaryIndex {
        self.index
    }
}
