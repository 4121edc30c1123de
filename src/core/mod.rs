//! Core domain types for the word game
//!
//! Languages, word normalization and the guess scorer. Everything here is pure:
//! no I/O, no clocks, no randomness.

mod feedback;
mod language;
mod word;

pub use feedback::{Feedback, LetterState};
pub use language::{Language, UnknownLanguage};
pub use word::{
    MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError, char_len, fold, is_in_alphabet, normalize,
};
