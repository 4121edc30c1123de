//! Lexic
//!
//! A multi-language word-guessing game core: deterministic daily selection,
//! accent-aware two-pass scoring, a guess validation gate and a round coordinator,
//! served over a small JSON API or played in the terminal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lexic::core::Language;
//! use lexic::game::{GameConfig, GameMode, Round};
//! use lexic::wordlists::Dictionaries;
//!
//! let dictionaries = Dictionaries::embedded();
//! let index = dictionaries.get(Language::En);
//! let today = chrono::Utc::now().date_naive();
//!
//! let mut round = Round::start(GameMode::DailyWord, index, GameConfig::default(), today).unwrap();
//! let hint = round.hint();
//! println!("{} letters, starts with {:?}", hint.length, hint.first_letter);
//!
//! match round.submit_guess("crane", index) {
//!     Ok(outcome) => println!("{}", outcome.letter_states),
//!     Err(err) => println!("rejected: {err}"),
//! }
//! ```

// Core domain types
pub mod core;

// Word lists and the dictionary index
pub mod wordlists;

// Selection, validation and round coordination
pub mod game;

// HTTP API
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
