//! Round coordinator
//!
//! A [`Round`] owns its secret words and decides, guess by guess, whether play
//! continues, advances to the next word of a daily set, or is over. Secrets are
//! only reachable through [`Round::revealed_answer`], which stays `None` until the
//! round is over. A round is never serialized with its secrets: [`Progress`] is the
//! saveable part, and [`Round::resume`] selects the words again from the saved day.

use super::{GameConfig, GameMode, Rejection, SelectionError, WordSelector, validate_guess};
use crate::core::{Feedback, Language, Word};
use crate::wordlists::DictionaryIndex;
use chrono::NaiveDate;
use log::{debug, error, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a started round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// One accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub word: String,
    pub letter_states: Feedback,
    pub is_correct: bool,
}

/// What a client may know about the word being guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordHint {
    pub length: usize,
    pub first_letter: Option<char>,
}

/// Board setup returned when a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInfo {
    pub word_length: usize,
    pub first_letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_total: Option<usize>,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter_states: Feedback,
    pub is_correct: bool,
    pub round_over: bool,
    /// Attempts used on the word this guess was scored against
    pub guess_count: usize,
    /// Every secret word, joined with `", "`; only set once the round is over
    pub revealed_answer: Option<String>,
    /// Set when a correct guess moved a daily set on to its next word
    pub next_word: Option<WordHint>,
}

/// Error type for rounds that could not be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The selector had nothing to offer
    NoWordsAvailable(SelectionError),
    /// Any other start failure
    FailedToStart(String),
}

impl StartError {
    /// Stable error key for API consumers
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::NoWordsAvailable(_) => "noWordsAvailable",
            Self::FailedToStart(_) => "failedToStart",
        }
    }
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable(err) => write!(f, "could not start round: {err}"),
            Self::FailedToStart(reason) => write!(f, "could not start round: {reason}"),
        }
    }
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoWordsAvailable(err) => Some(err),
            Self::FailedToStart(_) => None,
        }
    }
}

impl From<SelectionError> for StartError {
    fn from(err: SelectionError) -> Self {
        Self::NoWordsAvailable(err)
    }
}

/// Error type for guesses that were not scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The validation gate turned the guess away; no attempt was used
    Rejected(Rejection),
    /// The round is over and accepts no more guesses
    RoundOver,
    /// No round exists (or it belonged to a previous UTC day)
    NoActiveRound,
}

impl GuessError {
    /// Stable error key for API consumers
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Rejected(rejection) => rejection.key(),
            Self::RoundOver => "gameOver",
            Self::NoActiveRound => "noActiveGame",
        }
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(rejection) => write!(f, "{rejection}"),
            Self::RoundOver => write!(f, "the round is over"),
            Self::NoActiveRound => write!(f, "no active round"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<Rejection> for GuessError {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// Everything a player has done in a daily round, without the secret words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub language: Language,
    pub mode: GameMode,
    pub day: NaiveDate,
    pub set_total: usize,
    pub active_index: usize,
    /// Attempts on each word already solved, in set order
    pub solved: Vec<Vec<Attempt>>,
    pub attempts: Vec<Attempt>,
    pub max_attempts: usize,
    pub total_guesses: usize,
    pub status: RoundStatus,
}

/// One play-through, from word selection to game over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    language: Language,
    mode: GameMode,
    day: NaiveDate,
    secret_words: Vec<Word>,
    active_index: usize,
    solved: Vec<Vec<Attempt>>,
    attempts: Vec<Attempt>,
    max_attempts: usize,
    total_guesses: usize,
    status: RoundStatus,
}

impl Round {
    /// Start a round in the index's language
    ///
    /// `today` is the UTC day the round belongs to; daily modes pick their words from it.
    ///
    /// # Errors
    /// `StartError::NoWordsAvailable` if the selector has nothing to offer. Selection
    /// failures are never retried with another mode.
    pub fn start(
        mode: GameMode,
        index: &DictionaryIndex,
        config: GameConfig,
        today: NaiveDate,
    ) -> Result<Self, StartError> {
        Self::start_with_rng(mode, index, config, today, &mut rand::rng())
    }

    /// [`start`](Self::start) with a caller-supplied RNG for `random` rounds
    ///
    /// # Errors
    /// See [`start`](Self::start).
    pub fn start_with_rng<R: Rng + ?Sized>(
        mode: GameMode,
        index: &DictionaryIndex,
        config: GameConfig,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Self, StartError> {
        let selector = WordSelector::new(index);
        let picked = match mode {
            GameMode::Random => selector.random_word_with_rng(rng).map(|w| vec![w.clone()]),
            GameMode::DailyWord => selector.daily_word(today).map(|w| vec![w.clone()]),
            GameMode::DailySet => selector
                .require_daily_set(today, config.set_size)
                .map(|set| set.into_iter().cloned().collect()),
        };

        let secrets = picked.inspect_err(|err| {
            error!("cannot start {mode} round: {err}");
        })?;
        Self::with_secrets(index.language(), mode, secrets, config, today)
    }

    /// Start a round with explicit secret words
    ///
    /// # Errors
    /// `StartError::FailedToStart` for an empty word list, a zero attempt limit, or
    /// more than one word outside `dailySet` mode.
    pub fn with_secrets(
        language: Language,
        mode: GameMode,
        secret_words: Vec<Word>,
        config: GameConfig,
        day: NaiveDate,
    ) -> Result<Self, StartError> {
        if secret_words.is_empty() {
            return Err(StartError::FailedToStart("no secret words".to_string()));
        }
        if config.max_attempts == 0 {
            return Err(StartError::FailedToStart(
                "max attempts must be at least 1".to_string(),
            ));
        }
        if mode != GameMode::DailySet && secret_words.len() > 1 {
            return Err(StartError::FailedToStart(format!(
                "{mode} rounds take a single word, got {}",
                secret_words.len()
            )));
        }

        let round = Self {
            language,
            mode,
            day,
            secret_words,
            active_index: 0,
            solved: Vec::new(),
            attempts: Vec::new(),
            max_attempts: config.max_attempts,
            total_guesses: 0,
            status: RoundStatus::InProgress,
        };

        info!(
            "started {mode} round in {language} for {day}: {} word(s), first is {} letters",
            round.secret_words.len(),
            round.current_word().len()
        );
        Ok(round)
    }

    /// Rebuild a daily round from saved progress
    ///
    /// The secret words are selected again for `progress.day`, then every saved
    /// attempt is rescored against them. Progress that does not replay to the same
    /// feedback (a changed word list, a hand-edited file) is refused.
    ///
    /// # Errors
    /// `NoWordsAvailable` if the day's words can no longer be selected,
    /// `FailedToStart` for random rounds or inconsistent progress.
    pub fn resume(progress: Progress, index: &DictionaryIndex) -> Result<Self, StartError> {
        if progress.language != index.language() {
            return Err(StartError::FailedToStart(format!(
                "saved {} round given a {} dictionary",
                progress.language,
                index.language()
            )));
        }

        let selector = WordSelector::new(index);
        let secret_words: Vec<Word> = match progress.mode {
            GameMode::Random => {
                return Err(StartError::FailedToStart(
                    "random rounds cannot be resumed".to_string(),
                ));
            }
            GameMode::DailyWord => vec![selector.daily_word(progress.day)?.clone()],
            GameMode::DailySet => selector
                .require_daily_set(progress.day, progress.set_total)?
                .into_iter()
                .cloned()
                .collect(),
        };

        if !progress.replays_against(&secret_words) {
            return Err(StartError::FailedToStart(format!(
                "saved {} progress for {} does not match its words",
                progress.mode, progress.day
            )));
        }

        debug!(
            "resumed {} round in {} for {}: word {} of {}, {} guess(es)",
            progress.mode,
            progress.language,
            progress.day,
            progress.active_index + 1,
            secret_words.len(),
            progress.total_guesses
        );
        Ok(Self {
            language: progress.language,
            mode: progress.mode,
            day: progress.day,
            secret_words,
            active_index: progress.active_index,
            solved: progress.solved,
            attempts: progress.attempts,
            max_attempts: progress.max_attempts,
            total_guesses: progress.total_guesses,
            status: progress.status,
        })
    }

    /// Saveable snapshot of the round; holds no secret words
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            language: self.language,
            mode: self.mode,
            day: self.day,
            set_total: self.secret_words.len(),
            active_index: self.active_index,
            solved: self.solved.clone(),
            attempts: self.attempts.clone(),
            max_attempts: self.max_attempts,
            total_guesses: self.total_guesses,
            status: self.status,
        }
    }

    /// Submit a guess for the active word
    ///
    /// Invalid guesses leave the round untouched. A correct guess on a daily set
    /// that has more words advances to the next one with a fresh attempt budget.
    ///
    /// # Errors
    /// `RoundOver` once the round has ended, `Rejected` when the validation gate
    /// refuses the guess.
    pub fn submit_guess(
        &mut self,
        guess: &str,
        index: &DictionaryIndex,
    ) -> Result<GuessOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::RoundOver);
        }

        let answer = self.current_word();
        let word = validate_guess(guess, answer.len(), index).inspect_err(|rejection| {
            debug!("rejected guess '{}': {}", guess.trim(), rejection.key());
        })?;

        let letter_states = Feedback::calculate(&word, answer.text());
        let is_correct = answer.matches(&word);

        self.attempts.push(Attempt {
            word,
            letter_states: letter_states.clone(),
            is_correct,
        });
        self.total_guesses += 1;
        let guess_count = self.attempts.len();

        let mut next_word = None;
        if is_correct {
            if self.active_index + 1 < self.secret_words.len() {
                self.active_index += 1;
                self.solved.push(std::mem::take(&mut self.attempts));
                next_word = Some(self.hint());
                debug!(
                    "set word {} of {} solved",
                    self.active_index,
                    self.secret_words.len()
                );
            } else {
                self.status = RoundStatus::Won;
            }
        } else if guess_count >= self.max_attempts {
            self.status = RoundStatus::Lost;
        }

        if self.is_over() {
            info!(
                "{} round in {} over: {:?} after {} guess(es)",
                self.mode, self.language, self.status, self.total_guesses
            );
        }

        Ok(GuessOutcome {
            letter_states,
            is_correct,
            round_over: self.is_over(),
            guess_count,
            revealed_answer: self.revealed_answer(),
            next_word,
        })
    }

    /// Length and first letter of the word being guessed
    #[must_use]
    pub fn hint(&self) -> WordHint {
        let word = self.current_word();
        WordHint {
            length: word.len(),
            first_letter: word.first_letter(),
        }
    }

    /// Board setup for the word being guessed
    #[must_use]
    pub fn start_info(&self) -> StartInfo {
        let hint = self.hint();
        StartInfo {
            word_length: hint.length,
            first_letter: hint.first_letter,
            set_total: (self.mode == GameMode::DailySet).then_some(self.secret_words.len()),
        }
    }

    /// All secret words joined with `", "`, once the round is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<String> {
        self.is_over().then(|| {
            self.secret_words
                .iter()
                .map(Word::text)
                .collect::<Vec<_>>()
                .join(", ")
        })
    }

    /// True for a daily round that belongs to another UTC day
    #[must_use]
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.mode.is_daily() && self.day != today
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// UTC day the round was started on
    #[inline]
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    /// Zero-based position in the daily set (always 0 for single-word modes)
    #[inline]
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of secret words
    #[inline]
    #[must_use]
    pub fn set_total(&self) -> usize {
        self.secret_words.len()
    }

    /// Attempts on the active word, in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Attempts grouped by word: every solved word of a set, then the active one
    pub fn attempts_by_word(&self) -> impl Iterator<Item = &[Attempt]> {
        self.solved
            .iter()
            .map(Vec::as_slice)
            .chain(std::iter::once(self.attempts.as_slice()))
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Attempts left on the active word
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        if self.is_over() {
            0
        } else {
            self.max_attempts.saturating_sub(self.attempts.len())
        }
    }

    /// Accepted guesses across every word of the round
    #[inline]
    #[must_use]
    pub const fn total_guesses(&self) -> usize {
        self.total_guesses
    }

    fn current_word(&self) -> &Word {
        &self.secret_words[self.active_index]
    }
}

impl Progress {
    /// True when the saved attempts score the same against `secrets` and the
    /// counters agree with them
    fn replays_against(&self, secrets: &[Word]) -> bool {
        if self.max_attempts == 0
            || secrets.len() != self.set_total
            || self.active_index >= secrets.len()
            || self.solved.len() != self.active_index
            || self.attempts.len() > self.max_attempts
        {
            return false;
        }

        let words = self.solved.iter().chain(std::iter::once(&self.attempts));
        for (attempts, secret) in words.zip(secrets) {
            let consistent = attempts.iter().all(|attempt| {
                attempt.is_correct == secret.matches(&attempt.word)
                    && attempt.letter_states == Feedback::calculate(&attempt.word, secret.text())
            });
            if !consistent || attempts.len() > self.max_attempts {
                return false;
            }
        }
        // Each solved word ends on its correct guess, and only there
        let solved_cleanly = self.solved.iter().all(|attempts| {
            attempts.last().is_some_and(|a| a.is_correct)
                && attempts.iter().filter(|a| a.is_correct).count() == 1
        });
        let counted = self.solved.iter().map(Vec::len).sum::<usize>() + self.attempts.len();

        let last_correct = self.attempts.last().is_some_and(|a| a.is_correct);
        let status_fits = match self.status {
            RoundStatus::InProgress => {
                !last_correct && self.attempts.len() < self.max_attempts
            }
            RoundStatus::Won => last_correct && self.active_index + 1 == secrets.len(),
            RoundStatus::Lost => !last_correct && self.attempts.len() == self.max_attempts,
        };

        solved_cleanly && counted == self.total_guesses && status_fits
    }
}
