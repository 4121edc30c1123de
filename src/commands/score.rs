//! Score a guess against an answer without a round

use crate::core::{Feedback, char_len, fold};
use anyhow::{Result, ensure};

/// Letter states for `guess` against `answer`
///
/// # Errors
///
/// Returns an error if the two words differ in length.
pub fn score_words(guess: &str, answer: &str) -> Result<Feedback> {
    let guess = fold(guess.trim());
    let answer = fold(answer.trim());
    let (guess_len, answer_len) = (char_len(&guess), char_len(&answer));
    ensure!(
        guess_len == answer_len,
        "guess has {guess_len} letters but the answer has {answer_len}"
    );
    ensure!(guess_len > 0, "nothing to score");

    Ok(Feedback::calculate(&guess, &answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};

    #[test]
    fn scores_equal_length_words() {
        let feedback = score_words("ELLEL", "level").unwrap();
        assert_eq!(
            feedback.states(),
            &[Present, Present, Absent, Correct, Correct]
        );
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(score_words("crane", "moon").is_err());
        assert!(score_words("", "").is_err());
    }

    #[test]
    fn lengths_count_characters() {
        assert!(score_words("élève", "levée").is_ok());
    }
}
