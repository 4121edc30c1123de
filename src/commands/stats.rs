//! Persisted statistics: view and reset

use crate::core::Language;
use crate::game::GameMode;
use crate::game::stats::{GameStats, StatsBook};
use anyhow::{Context, Result};
use std::path::Path;

/// Stats for the requested buckets, in language then mode order
///
/// # Errors
///
/// Returns an error if the stats file exists but cannot be read.
pub fn load_stats(
    path: &Path,
    language: Option<Language>,
    mode: Option<GameMode>,
) -> Result<Vec<(Language, GameMode, GameStats)>> {
    let book = StatsBook::load(path)
        .with_context(|| format!("reading statistics from {}", path.display()))?;

    let languages: Vec<Language> = language.map_or_else(|| Language::ALL.to_vec(), |l| vec![l]);
    let modes: Vec<GameMode> = mode.map_or_else(|| GameMode::ALL.to_vec(), |m| vec![m]);

    Ok(languages
        .iter()
        .flat_map(|&l| modes.iter().map(move |&m| (l, m)))
        .map(|(l, m)| (l, m, book.get(l, m)))
        .collect())
}

/// Reset one bucket, or everything when no language/mode is given
///
/// # Errors
///
/// Returns an error if the stats file cannot be read or written.
pub fn reset_stats(path: &Path, language: Option<Language>, mode: Option<GameMode>) -> Result<()> {
    let mut book = StatsBook::load(path)
        .with_context(|| format!("reading statistics from {}", path.display()))?;

    match (language, mode) {
        (None, None) => book.clear(),
        (language, mode) => {
            let languages = language.map_or_else(|| Language::ALL.to_vec(), |l| vec![l]);
            let modes = mode.map_or_else(|| GameMode::ALL.to_vec(), |m| vec![m]);
            for &l in &languages {
                for &m in &modes {
                    book.reset(l, m);
                }
            }
        }
    }

    book.save(path)
        .with_context(|| format!("writing statistics to {}", path.display()))
}
