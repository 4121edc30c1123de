//! Word list loading utilities
//!
//! Raw lists come either from the embedded constants or from `<code>.txt` and
//! `<code>-allowed.txt` files in a directory. Raw lists are unfiltered; [`DictionaryIndex::build`] does the filtering.
//!
//! [`DictionaryIndex::build`]: super::DictionaryIndex::build

use super::{ENGLISH, ENGLISH_ALLOWED, FRENCH, FRENCH_ALLOWED};
use crate::core::Language;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load raw entries from a file, one per line
///
/// Blank lines and `#` comments are skipped. Everything else is returned untouched.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use lexic::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/en.txt").unwrap();
/// println!("Loaded {} entries", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_list(&content))
}

/// Split list content into raw entries
#[must_use]
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

/// Embedded raw list for a language
#[must_use]
pub const fn embedded(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => ENGLISH,
        Language::Fr => FRENCH,
    }
}

/// Embedded extra guesses for a language
#[must_use]
pub const fn embedded_allowed(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => ENGLISH_ALLOWED,
        Language::Fr => FRENCH_ALLOWED,
    }
}

/// Path of a language's list inside an override directory
#[must_use]
pub fn list_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(format!("{}.txt", language.code()))
}

/// Path of a language's extra guesses inside an override directory
#[must_use]
pub fn allowed_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(format!("{}-allowed.txt", language.code()))
}
