//! Saved daily rounds for the terminal client
//!
//! One JSON file per `(mode, language)` holding the player's [`Progress`], never the
//! secret words; loading selects them again from the saved day. A file from another
//! UTC day is deleted on load instead of being resumed. Random rounds are never saved.

use super::{GameMode, Progress, Round};
use crate::core::Language;
use crate::wordlists::DictionaryIndex;
use chrono::NaiveDate;
use log::{info, warn};
use std::io;
use std::path::{Path, PathBuf};

/// Default directory for saved rounds: `<data dir>/lexic/rounds`
#[must_use]
pub fn default_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("lexic").join("rounds"))
}

/// File holding the saved round for a mode and language
#[must_use]
pub fn round_path(dir: &Path, mode: GameMode, language: Language) -> PathBuf {
    dir.join(format!("daily-{mode}-{language}.json"))
}

/// Save a daily round's progress; random rounds are skipped
///
/// # Errors
/// Any I/O error while creating the directory or writing the file.
pub fn save_round(dir: &Path, round: &Round) -> io::Result<()> {
    if !round.mode().is_daily() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)?;
    let json = serde_json::to_string(&round.progress()).map_err(io::Error::other)?;
    std::fs::write(round_path(dir, round.mode(), round.language()), json)
}

/// Load today's saved round in the index's language
///
/// Stale, unreadable and no longer replayable files are deleted and reported as
/// no saved round.
///
/// # Errors
/// I/O errors other than the file not existing.
pub fn load_round(
    dir: &Path,
    mode: GameMode,
    index: &DictionaryIndex,
    today: NaiveDate,
) -> io::Result<Option<Round>> {
    if !mode.is_daily() {
        return Ok(None);
    }

    let language = index.language();
    let path = round_path(dir, mode, language);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };

    let Ok(progress) = serde_json::from_str::<Progress>(&text) else {
        warn!("discarding unreadable saved round {}", path.display());
        clear_round(dir, mode, language)?;
        return Ok(None);
    };

    if progress.day != today || progress.mode != mode || progress.language != language {
        info!(
            "discarding saved {mode} round from {} (today is {today})",
            progress.day
        );
        clear_round(dir, mode, language)?;
        return Ok(None);
    }

    match Round::resume(progress, index) {
        Ok(round) => Ok(Some(round)),
        Err(err) => {
            warn!("discarding saved round {}: {err}", path.display());
            clear_round(dir, mode, language)?;
            Ok(None)
        }
    }
}

/// Delete a saved round if there is one
///
/// # Errors
/// I/O errors other than the file not existing.
pub fn clear_round(dir: &Path, mode: GameMode, language: Language) -> io::Result<()> {
    match std::fs::remove_file(round_path(dir, mode, language)) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}
