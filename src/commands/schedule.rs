//! Daily schedule: the word of the day and the daily set over a range of UTC days
//!
//! Operator tool for checking what players will see. It prints secrets, so it is
//! never exposed through the server.

use crate::core::Language;
use crate::game::{SelectionError, WordSelector};
use crate::wordlists::DictionaryIndex;
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;

/// Picks for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: NaiveDate,
    pub word: Result<String, SelectionError>,
    pub set: Result<Vec<String>, SelectionError>,
}

/// Schedule for a run of days in one language
#[derive(Debug, Clone)]
pub struct Schedule {
    pub language: Language,
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Daily words that come up more than once in the range, with their counts
    #[must_use]
    pub fn repeated_words(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for entry in &self.entries {
            if let Ok(word) = &entry.word {
                *counts.entry(word.as_str()).or_insert(0) += 1;
            }
        }
        let mut repeated: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        repeated.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        repeated
    }
}

/// Compute the daily picks for `days` consecutive UTC days starting at `from`
#[must_use]
pub fn build_schedule(
    index: &DictionaryIndex,
    from: NaiveDate,
    days: u64,
    set_size: usize,
    show_progress: bool,
) -> Schedule {
    let selector = WordSelector::new(index);

    let pb = if show_progress {
        ProgressBar::new(days)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut entries = Vec::new();
    for offset in 0..days {
        let Some(day) = from.checked_add_days(Days::new(offset)) else {
            break;
        };
        pb.set_message(day.to_string());

        entries.push(ScheduleEntry {
            day,
            word: selector.daily_word(day).map(|w| w.text().to_string()),
            set: selector
                .require_daily_set(day, set_size)
                .map(|set| set.iter().map(|w| w.text().to_string()).collect()),
        });
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    Schedule {
        language: index.language(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionaries;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    #[test]
    fn schedule_matches_selector() {
        let dictionaries = Dictionaries::embedded();
        let index = dictionaries.get(Language::En);
        let schedule = build_schedule(index, day(30), 5, 3, false);

        assert_eq!(schedule.entries.len(), 5);
        assert_eq!(schedule.entries[2].day, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        let selector = WordSelector::new(index);
        for entry in &schedule.entries {
            let expected = selector.daily_word(entry.day).unwrap().text().to_string();
            assert_eq!(entry.word.as_ref().unwrap(), &expected);
            assert_eq!(entry.set.as_ref().unwrap().len(), 3);
        }
    }

    #[test]
    fn single_word_dictionary_repeats_every_day() {
        let index = DictionaryIndex::build(Language::Fr, &["maison"]);
        let schedule = build_schedule(&index, day(1), 4, 3, false);

        assert_eq!(schedule.repeated_words(), vec![("maison".to_string(), 4)]);
        assert!(matches!(
            schedule.entries[0].set,
            Err(SelectionError::SetExhausted { found: 1, .. })
        ));
    }
}
