//! Game rules: word selection, guess validation and round coordination
//!
//! The pieces fit together as
//! [`WordSelector`] → [`Round::start`] → [`validate_guess`] → [`Feedback`](crate::core::Feedback),
//! with [`SessionStore`] holding server-side rounds keyed by opaque ids.

mod clock;
mod round;
mod selector;
mod session;
pub mod stats;
pub mod storage;
mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use round::{
    Attempt, GuessError, GuessOutcome, Progress, Round, RoundStatus, StartError, StartInfo,
    WordHint,
};
pub use selector::{SelectionError, WordSelector, day_seed};
pub use session::{SessionId, SessionStore};
pub use validation::{Rejection, validate_guess};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of guesses per word
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default number of words in the daily set
pub const DEFAULT_SET_SIZE: usize = 3;

/// How a round's secret words are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    /// Fresh random word every round
    #[serde(alias = "infinite")]
    Random,
    /// One word per UTC day, shared by every player
    #[serde(alias = "wordOfTheDay")]
    DailyWord,
    /// A sequence of unique words per UTC day, solved in order
    #[serde(alias = "todaysSet")]
    DailySet,
}

impl GameMode {
    /// Every mode
    pub const ALL: [Self; 3] = [Self::Random, Self::DailyWord, Self::DailySet];

    /// Wire name of the mode
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::DailyWord => "dailyWord",
            Self::DailySet => "dailySet",
        }
    }

    /// True for modes whose words depend on the UTC day
    #[must_use]
    pub const fn is_daily(self) -> bool {
        matches!(self, Self::DailyWord | Self::DailySet)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown game mode '{}' (expected random, daily-word or daily-set)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "random" | "infinite" => Ok(Self::Random),
            "dailyword" | "daily" | "wordoftheday" => Ok(Self::DailyWord),
            "dailyset" | "todaysset" | "set" => Ok(Self::DailySet),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// Round parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed per word before the round is lost
    pub max_attempts: usize,
    /// Number of words in a daily set
    pub set_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            set_size: DEFAULT_SET_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_cli_and_wire_spellings() {
        assert_eq!("random".parse::<GameMode>(), Ok(GameMode::Random));
        assert_eq!("daily-word".parse::<GameMode>(), Ok(GameMode::DailyWord));
        assert_eq!("dailyWord".parse::<GameMode>(), Ok(GameMode::DailyWord));
        assert_eq!("daily_set".parse::<GameMode>(), Ok(GameMode::DailySet));
        assert_eq!("todaysSet".parse::<GameMode>(), Ok(GameMode::DailySet));
        assert_eq!("infinite".parse::<GameMode>(), Ok(GameMode::Random));
        assert!("weekly".parse::<GameMode>().is_err());
    }

    #[test]
    fn mode_serde_names_and_aliases() {
        assert_eq!(
            serde_json::to_string(&GameMode::DailySet).unwrap(),
            "\"dailySet\""
        );
        let legacy: GameMode = serde_json::from_str("\"wordOfTheDay\"").unwrap();
        assert_eq!(legacy, GameMode::DailyWord);
    }

    #[test]
    fn only_daily_modes_are_daily() {
        assert!(!GameMode::Random.is_daily());
        assert!(GameMode::DailyWord.is_daily());
        assert!(GameMode::DailySet.is_daily());
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.set_size, 3);
    }
}
