//! Command implementations

pub mod check;
pub mod play;
pub mod schedule;
pub mod score;
pub mod stats;

pub use check::{CheckResult, check_word};
pub use play::{PlayEnd, PlayOptions, run_play};
pub use schedule::{Schedule, ScheduleEntry, build_schedule};
pub use score::score_words;
pub use stats::{load_stats, reset_stats};
