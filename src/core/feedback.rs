//! Guess feedback: per-letter states and the scoring algorithm
//!
//! Feedback is a sequence of [`LetterState`]s, one per position of the guess:
//! - `correct` = right letter, right position
//! - `present` = letter occurs elsewhere in the answer and was not already credited
//! - `absent`  = no remaining occurrence in the answer
//!
//! `empty` only exists for unfilled board cells and is never produced by scoring.

use super::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Correct,
    Present,
    Absent,
    Empty,
}

impl LetterState {
    /// Single-character code: `G` correct, `Y` present, `-` absent, `.` empty
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Empty => '.',
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }
}

/// Feedback for one guess against one answer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Score `guess` against `answer`
    ///
    /// Both strings are lowercased and accent-stripped first, then:
    /// 1. First pass: mark exact position matches as correct and consume those answer letters
    /// 2. Second pass: for every other position, credit the first unconsumed occurrence of
    ///    the letter in the answer (left to right) as present
    ///
    /// The caller guarantees equal lengths; the validation gate checks it before scoring.
    ///
    /// # Examples
    /// ```
    /// use lexic::core::{Feedback, LetterState::*};
    ///
    /// let feedback = Feedback::calculate("ellel", "level");
    /// assert_eq!(feedback.states(), &[Present, Present, Absent, Correct, Correct]);
    ///
    /// assert!(Feedback::calculate("ecole", "ÉCOLE").is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, answer: &str) -> Self {
        let guess: Vec<char> = normalize(guess).chars().collect();
        let mut available: Vec<Option<char>> = normalize(answer).chars().map(Some).collect();

        debug_assert_eq!(
            guess.len(),
            available.len(),
            "guess and answer must have the same length"
        );

        let mut states = vec![LetterState::Absent; guess.len()];

        // First pass: exact matches
        for (i, &letter) in guess.iter().enumerate() {
            if available.get(i).copied().flatten() == Some(letter) {
                states[i] = LetterState::Correct;
                available[i] = None;
            }
        }

        // Second pass: displaced matches, first unconsumed occurrence wins
        for (i, &letter) in guess.iter().enumerate() {
            if states[i] == LetterState::Correct {
                continue;
            }
            if let Some(slot) = available.iter_mut().find(|slot| **slot == Some(letter)) {
                states[i] = LetterState::Present;
                *slot = None;
            }
        }

        Self(states)
    }

    /// Build feedback from explicit states
    #[must_use]
    pub const fn from_states(states: Vec<LetterState>) -> Self {
        Self(states)
    }

    /// Per-position states, in guess order
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for feedback over an empty guess
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    /// Count the number of present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Parse feedback from a string like "GY-G-" or "🟩🟨⬛🟩⬛"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'x'/⬛ for absent
    /// - '.'/⬜ for empty
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(LetterState::Correct),
                'Y' | 'y' | '🟨' => Some(LetterState::Present),
                '-' | '_' | 'X' | 'x' | '⬛' => Some(LetterState::Absent),
                '.' | '⬜' => Some(LetterState::Empty),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .filter(|states| !states.is_empty())
            .map(Self)
    }

    /// Convert feedback to an emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: String = self.0.iter().map(|s| s.code()).collect();
        f.write_str(&codes)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
