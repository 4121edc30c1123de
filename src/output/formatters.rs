//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState};
use colored::{ColoredString, Colorize};

/// Color a single board tile
#[must_use]
pub fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Empty => text.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn format_row(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.states())
        .map(|(letter, &state)| tile(letter, state).to_string())
        .collect()
}

/// Render an empty row hinting the word length and first letter
#[must_use]
pub fn format_hint_row(length: usize, first_letter: Option<char>) -> String {
    (0..length)
        .map(|i| match (i, first_letter) {
            (0, Some(letter)) => tile(letter, LetterState::Empty).to_string(),
            _ => tile('_', LetterState::Empty).to_string(),
        })
        .collect()
}

/// Emoji grid for sharing a finished board, one row per guess
#[must_use]
pub fn share_grid<'a>(rows: impl IntoIterator<Item = &'a Feedback>) -> String {
    rows.into_iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emoji grids for several words, one block per word separated by a blank line
#[must_use]
pub fn share_grids<'a, W>(words: impl IntoIterator<Item = W>) -> String
where
    W: IntoIterator<Item = &'a Feedback>,
{
    words
        .into_iter()
        .map(share_grid)
        .filter(|grid| !grid.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
