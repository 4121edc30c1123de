//! Server-side round storage
//!
//! Rounds are keyed by an opaque id the client holds; the secret never leaves
//! this map before the round is over. Each round sits behind its own mutex, so a
//! guess serializes only against other guesses for the same round.

use super::{GuessError, GuessOutcome, Round, StartInfo};
use crate::wordlists::Dictionaries;
use chrono::NaiveDate;
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Opaque 128-bit session identifier, rendered as 32 hex digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Fresh random id
    #[must_use]
    pub fn generate() -> Self {
        let value: u128 = rand::rng().random();
        Self(format!("{value:032x}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type SharedRound = Arc<Mutex<Round>>;

/// Map of live rounds
#[derive(Debug, Default)]
pub struct SessionStore {
    rounds: RwLock<FxHashMap<SessionId, SharedRound>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a started round under a fresh id
    pub fn insert(&self, round: Round) -> (SessionId, StartInfo) {
        let info = round.start_info();
        let id = SessionId::generate();
        self.write().insert(id.clone(), Arc::new(Mutex::new(round)));
        debug!("session {id} opened");
        (id, info)
    }

    /// Score a guess for the round behind `id`
    ///
    /// A daily round from another UTC day is dropped and reported as missing.
    ///
    /// # Errors
    /// `NoActiveRound` for unknown or stale sessions, otherwise whatever
    /// [`Round::submit_guess`] reports.
    pub fn submit_guess(
        &self,
        id: &SessionId,
        guess: &str,
        dictionaries: &Dictionaries,
        today: NaiveDate,
    ) -> Result<GuessOutcome, GuessError> {
        let shared = self.read().get(id).cloned().ok_or(GuessError::NoActiveRound)?;
        let mut round = shared.lock().unwrap_or_else(PoisonError::into_inner);

        if round.is_stale(today) {
            drop(round);
            self.remove(id);
            info!("discarded stale daily round for session {id}");
            return Err(GuessError::NoActiveRound);
        }

        let index = dictionaries.get(round.language());
        round.submit_guess(guess, index)
    }

    /// Snapshot of the round behind `id`, unless it is missing or stale
    #[must_use]
    pub fn get(&self, id: &SessionId, today: NaiveDate) -> Option<Round> {
        let shared = self.read().get(id).cloned()?;
        let round = shared.lock().unwrap_or_else(PoisonError::into_inner);
        (!round.is_stale(today)).then(|| round.clone())
    }

    /// Drop a session; returns whether it existed
    pub fn remove(&self, id: &SessionId) -> bool {
        self.write().remove(id).is_some()
    }

    /// Drop finished rounds, stale daily rounds and random rounds older than a day
    ///
    /// Returns the number of sessions removed.
    pub fn purge(&self, today: NaiveDate) -> usize {
        let mut rounds = self.write();
        let before = rounds.len();
        rounds.retain(|_, shared| {
            let round = shared.lock().unwrap_or_else(PoisonError::into_inner);
            !(round.is_over() || round.is_stale(today) || (today - round.day()).num_days() > 1)
        });
        let removed = before - rounds.len();
        debug!("purged {removed} session(s), {} remain", rounds.len());
        removed
    }

    /// Number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, FxHashMap<SessionId, SharedRound>> {
        self.rounds.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, FxHashMap<SessionId, SharedRound>> {
        self.rounds.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Language, Word};
    use crate::game::{GameConfig, GameMode, Rejection};
    use std::thread;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn round(mode: GameMode, secret: &str, on: NaiveDate) -> Round {
        Round::with_secrets(
            Language::En,
            mode,
            vec![Word::new(secret, Language::En).unwrap()],
            GameConfig::default(),
            on,
        )
        .unwrap()
    }

    #[test]
    fn ids_are_unique_hex() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
        assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn guesses_reach_the_right_round() {
        let dictionaries = Dictionaries::embedded();
        let store = SessionStore::new();
        let (first, info) = store.insert(round(GameMode::Random, "crane", day(1)));
        let (second, _) = store.insert(round(GameMode::Random, "slate", day(1)));
        assert_eq!(info.word_length, 5);
        assert_eq!(store.len(), 2);

        let outcome = store.submit_guess(&first, "crane", &dictionaries, day(1)).unwrap();
        assert!(outcome.is_correct);
        let outcome = store.submit_guess(&second, "crane", &dictionaries, day(1)).unwrap();
        assert!(!outcome.is_correct);
    }

    #[test]
    fn unknown_session_has_no_round() {
        let dictionaries = Dictionaries::embedded();
        let store = SessionStore::new();
        assert_eq!(
            store.submit_guess(&SessionId::from("nope"), "crane", &dictionaries, day(1)),
            Err(GuessError::NoActiveRound)
        );
    }

    #[test]
    fn stale_daily_round_is_discarded() {
        let dictionaries = Dictionaries::embedded();
        let store = SessionStore::new();
        let (id, _) = store.insert(round(GameMode::DailyWord, "crane", day(1)));

        assert!(store.get(&id, day(1)).is_some());
        assert!(store.get(&id, day(2)).is_none());
        assert_eq!(
            store.submit_guess(&id, "crane", &dictionaries, day(2)),
            Err(GuessError::NoActiveRound)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn random_round_survives_midnight() {
        let dictionaries = Dictionaries::embedded();
        let store = SessionStore::new();
        let (id, _) = store.insert(round(GameMode::Random, "crane", day(1)));
        assert!(store.submit_guess(&id, "slate", &dictionaries, day(2)).is_ok());
    }

    #[test]
    fn rejections_pass_through() {
        let dictionaries = Dictionaries::embedded();
        let store = SessionStore::new();
        let (id, _) = store.insert(round(GameMode::Random, "crane", day(1)));
        assert_eq!(
            store.submit_guess(&id, "zzzzz", &dictionaries, day(1)),
            Err(GuessError::Rejected(Rejection::NotInWordList))
        );
    }

    #[test]
    fn purge_drops_finished_stale_and_abandoned_rounds() {
        let dictionaries = Dictionaries::embedded();
        let store = SessionStore::new();
        let (done, _) = store.insert(round(GameMode::Random, "crane", day(3)));
        store.submit_guess(&done, "crane", &dictionaries, day(3)).unwrap();
        let (stale, _) = store.insert(round(GameMode::DailyWord, "crane", day(2)));
        let (abandoned, _) = store.insert(round(GameMode::Random, "crane", day(1)));
        let (live, _) = store.insert(round(GameMode::Random, "crane", day(2)));

        assert_eq!(store.purge(day(3)), 3);
        assert!(store.get(&done, day(3)).is_none());
        assert!(store.get(&stale, day(2)).is_none());
        assert!(store.get(&abandoned, day(3)).is_none());
        assert!(store.get(&live, day(3)).is_some());
    }

    #[test]
    fn concurrent_guesses_never_exceed_the_attempt_limit() {
        let dictionaries = Arc::new(Dictionaries::embedded());
        let store = Arc::new(SessionStore::new());
        let (id, _) = store.insert(round(GameMode::Random, "crane", day(1)));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                let dictionaries = Arc::clone(&dictionaries);
                let id = id.clone();
                thread::spawn(move || store.submit_guess(&id, "slate", &dictionaries, day(1)))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let accepted = results.iter().filter(|r| r.is_ok()).count();
        let refused = results
            .iter()
            .filter(|r| **r == Err(GuessError::RoundOver))
            .count();

        assert_eq!(accepted, 6);
        assert_eq!(refused, 10);
        assert_eq!(store.get(&id, day(1)).unwrap().attempts().len(), 6);
    }
}
