//! Logger setup
//!
//! `RUST_LOG` always wins; otherwise the command picks the default level.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter for a command: `debug` when verbose, else the given level
#[must_use]
pub const fn default_level(verbose: bool, quiet_default: LevelFilter) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        quiet_default
    }
}

/// Install the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init(default_level: LevelFilter) {
    let filter = default_level.as_str().to_ascii_lowercase();
    let _ = Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_to_debug() {
        assert_eq!(default_level(true, LevelFilter::Warn), LevelFilter::Debug);
        assert_eq!(default_level(false, LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(default_level(false, LevelFilter::Info), LevelFilter::Info);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LevelFilter::Warn);
        init(LevelFilter::Debug);
    }
}
