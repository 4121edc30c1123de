//! Player statistics per language and mode
//!
//! Daily results count once per UTC day. Streaks in daily modes only continue
//! across consecutive UTC days; in random mode every win extends the streak.

use super::{GameMode, Round, RoundStatus};
use crate::core::Language;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Most recent games kept per bucket
pub const MAX_RECENT_GAMES: usize = 10;

/// A finished round as the stats see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub won: bool,
    pub num_guesses: usize,
    pub word: String,
    pub timestamp: DateTime<Utc>,
}

impl GameResult {
    /// Result of a finished round; `None` while it is still in progress
    #[must_use]
    pub fn from_round(round: &Round, timestamp: DateTime<Utc>) -> Option<Self> {
        Some(Self {
            won: round.status() == RoundStatus::Won,
            num_guesses: round.total_guesses(),
            word: round.revealed_answer()?,
            timestamp,
        })
    }
}

/// Counters for one `(language, mode)` bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_played: Option<DateTime<Utc>>,
    pub last_completed: Option<DateTime<Utc>>,
    /// Guess count → number of wins with that many guesses
    pub guess_distribution: BTreeMap<usize, u32>,
    /// Most recent first
    pub recent_games: Vec<GameResult>,
}

impl GameStats {
    /// Share of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) * 100.0 / f64::from(self.games_played)
        }
    }

    /// Fold a result into the counters
    ///
    /// Returns `false` when a daily result was ignored because a win was already
    /// recorded on the same UTC day.
    pub fn record(&mut self, result: &GameResult, mode: GameMode, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();
        let last_day = self.last_completed.map(|t| t.date_naive());

        if mode.is_daily() && last_day == Some(today) {
            debug!("{mode} result for {today} already recorded");
            return false;
        }

        if result.won {
            let continues = !mode.is_daily() || last_day == today.pred_opt();
            self.current_streak = if continues {
                self.current_streak + 1
            } else {
                1
            };
            self.games_won += 1;
            self.last_completed = Some(now);
            *self
                .guess_distribution
                .entry(result.num_guesses)
                .or_default() += 1;
        } else {
            self.current_streak = 0;
        }

        self.games_played += 1;
        self.last_played = Some(now);
        self.max_streak = self.max_streak.max(self.current_streak);
        self.recent_games.insert(0, result.clone());
        self.recent_games.truncate(MAX_RECENT_GAMES);
        true
    }

    /// Drop out-of-range values from a hand-edited or older file
    fn sanitize(&mut self) {
        self.recent_games.truncate(MAX_RECENT_GAMES);
        self.max_streak = self.max_streak.max(self.current_streak);
        self.games_won = self.games_won.min(self.games_played);
    }
}

/// One stored bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub language: Language,
    pub mode: GameMode,
    pub stats: GameStats,
}

/// Every bucket, as persisted to disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsBook {
    records: Vec<StatsRecord>,
}

impl StatsBook {
    /// Default location: `<data dir>/lexic/stats.json`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("lexic").join("stats.json"))
    }

    /// Load from `path`; a missing or unreadable-as-JSON file yields empty stats
    ///
    /// # Errors
    /// I/O errors other than the file not existing.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err),
        };

        match serde_json::from_str::<Self>(&text) {
            Ok(mut book) => {
                for record in &mut book.records {
                    record.stats.sanitize();
                }
                Ok(book)
            }
            Err(err) => {
                warn!("ignoring corrupt stats file {}: {err}", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Write to `path`, creating parent directories
    ///
    /// # Errors
    /// Any I/O error while creating the directory or writing the file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Stats for a bucket (zeroed if never played)
    #[must_use]
    pub fn get(&self, language: Language, mode: GameMode) -> GameStats {
        self.find(language, mode)
            .map(|record| record.stats.clone())
            .unwrap_or_default()
    }

    /// Record a result; returns the updated stats and whether the result counted
    pub fn record(
        &mut self,
        result: &GameResult,
        language: Language,
        mode: GameMode,
        now: DateTime<Utc>,
    ) -> (GameStats, bool) {
        let stats = self.entry(language, mode);
        let counted = stats.record(result, mode, now);
        (stats.clone(), counted)
    }

    /// Clear one bucket
    pub fn reset(&mut self, language: Language, mode: GameMode) {
        self.records
            .retain(|record| !(record.language == language && record.mode == mode));
    }

    /// Clear everything
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Last UTC day a bucket recorded a win
    #[must_use]
    pub fn last_completed_day(&self, language: Language, mode: GameMode) -> Option<NaiveDate> {
        self.find(language, mode)
            .and_then(|record| record.stats.last_completed)
            .map(|t| t.date_naive())
    }

    fn find(&self, language: Language, mode: GameMode) -> Option<&StatsRecord> {
        self.records
            .iter()
            .find(|record| record.language == language && record.mode == mode)
    }

    fn entry(&mut self, language: Language, mode: GameMode) -> &mut GameStats {
        let pos = match self
            .records
            .iter()
            .position(|record| record.language == language && record.mode == mode)
        {
            Some(pos) => pos,
            None => {
                self.records.push(StatsRecord {
                    language,
                    mode,
                    stats: GameStats::default(),
                });
                self.records.len() - 1
            }
        };
        &mut self.records[pos].stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap()
    }

    fn win(guesses: usize, when: DateTime<Utc>) -> GameResult {
        GameResult {
            won: true,
            num_guesses: guesses,
            word: "crane".to_string(),
            timestamp: when,
        }
    }

    fn loss(when: DateTime<Utc>) -> GameResult {
        GameResult {
            won: false,
            num_guesses: 6,
            word: "crane".to_string(),
            timestamp: when,
        }
    }

    #[test]
    fn random_wins_always_extend_the_streak() {
        let mut stats = GameStats::default();
        for hour in 0..3 {
            assert!(stats.record(&win(4, at(1, hour)), GameMode::Random, at(1, hour)));
        }
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.guess_distribution.get(&4), Some(&3));
    }

    #[test]
    fn loss_resets_streak_but_keeps_max() {
        let mut stats = GameStats::default();
        stats.record(&win(3, at(1, 1)), GameMode::Random, at(1, 1));
        stats.record(&win(5, at(1, 2)), GameMode::Random, at(1, 2));
        stats.record(&loss(at(1, 3)), GameMode::Random, at(1, 3));

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        // Losses stay out of the distribution
        assert_eq!(stats.guess_distribution.values().sum::<u32>(), 2);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn daily_results_count_once_per_day() {
        let mut stats = GameStats::default();
        assert!(stats.record(&win(3, at(1, 9)), GameMode::DailyWord, at(1, 9)));
        assert!(!stats.record(&win(2, at(1, 18)), GameMode::DailyWord, at(1, 18)));
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn daily_loss_does_not_block_a_later_record() {
        // last_completed only moves on a win
        let mut stats = GameStats::default();
        assert!(stats.record(&loss(at(1, 9)), GameMode::DailySet, at(1, 9)));
        assert!(stats.record(&win(9, at(1, 10)), GameMode::DailySet, at(1, 10)));
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn daily_streak_needs_consecutive_days() {
        let mut stats = GameStats::default();
        stats.record(&win(3, at(1, 23)), GameMode::DailyWord, at(1, 23));
        stats.record(&win(3, at(2, 0)), GameMode::DailyWord, at(2, 0));
        assert_eq!(stats.current_streak, 2);

        // Day 3 skipped
        stats.record(&win(3, at(4, 12)), GameMode::DailyWord, at(4, 12));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn recent_games_are_capped_newest_first() {
        let mut stats = GameStats::default();
        let start = at(1, 0);
        for i in 0..15 {
            let when = start + TimeDelta::minutes(i);
            stats.record(&win(4, when), GameMode::Random, when);
        }
        assert_eq!(stats.recent_games.len(), MAX_RECENT_GAMES);
        assert_eq!(stats.recent_games[0].timestamp, start + TimeDelta::minutes(14));
    }

    #[test]
    fn book_keeps_buckets_apart() {
        let mut book = StatsBook::default();
        book.record(&win(3, at(1, 1)), Language::En, GameMode::Random, at(1, 1));
        book.record(&win(4, at(1, 1)), Language::Fr, GameMode::DailyWord, at(1, 1));

        assert_eq!(book.get(Language::En, GameMode::Random).games_won, 1);
        assert_eq!(book.get(Language::Fr, GameMode::DailyWord).games_won, 1);
        assert_eq!(book.get(Language::En, GameMode::DailyWord), GameStats::default());
        assert_eq!(
            book.last_completed_day(Language::Fr, GameMode::DailyWord),
            Some(at(1, 1).date_naive())
        );

        book.reset(Language::En, GameMode::Random);
        assert_eq!(book.get(Language::En, GameMode::Random), GameStats::default());
        assert_eq!(book.get(Language::Fr, GameMode::DailyWord).games_won, 1);

        book.clear();
        assert_eq!(book, StatsBook::default());
    }

    #[test]
    fn book_save_and_load() {
        let dir = std::env::temp_dir().join(format!("lexic-stats-{}", std::process::id()));
        let path = dir.join("nested").join("stats.json");

        let mut book = StatsBook::default();
        book.record(&win(3, at(1, 1)), Language::En, GameMode::DailySet, at(1, 1));
        book.save(&path).unwrap();

        let loaded = StatsBook::load(&path).unwrap();
        assert_eq!(loaded, book);

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(StatsBook::load(&path).unwrap(), StatsBook::default());

        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(StatsBook::load(&path).unwrap(), StatsBook::default());
    }

    #[test]
    fn result_from_finished_round_only() {
        use crate::core::Word;
        use crate::game::GameConfig;
        use crate::wordlists::DictionaryIndex;

        let index = DictionaryIndex::build(Language::En, &["crane", "slate"]);
        let mut round = Round::with_secrets(
            Language::En,
            GameMode::Random,
            vec![Word::new("crane", Language::En).unwrap()],
            GameConfig::default(),
            at(1, 0).date_naive(),
        )
        .unwrap();

        assert_eq!(GameResult::from_round(&round, at(1, 1)), None);
        round.submit_guess("slate", &index).unwrap();
        round.submit_guess("crane", &index).unwrap();

        let result = GameResult::from_round(&round, at(1, 1)).unwrap();
        assert!(result.won);
        assert_eq!(result.num_guesses, 2);
        assert_eq!(result.word, "crane");
    }
}
