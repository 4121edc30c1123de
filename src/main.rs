//! Lexic - CLI
//!
//! Play a round in the terminal, serve the JSON API, or inspect words, scores,
//! daily schedules and statistics.

use anyhow::{Context, Result, ensure};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use lexic::{
    commands::{
        PlayOptions, build_schedule, check_word, load_stats, reset_stats, run_play,
        score_words,
    },
    core::{Language, MAX_WORD_LENGTH, MIN_WORD_LENGTH},
    game::{GameConfig, GameMode, SystemClock, stats::StatsBook, storage},
    logging,
    output::{print_check_result, print_schedule, print_score, print_stats},
    server::{self, AppState, ServerConfig},
    wordlists::Dictionaries,
};
use log::{LevelFilter, debug};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "lexic",
    about = "Multi-language word-guessing game with daily words, daily sets and a JSON API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory with `<code>.txt` (and optional `<code>-allowed.txt`) word lists overriding the embedded ones
    #[arg(short = 'w', long, global = true, env = "LEXIC_WORDLIST_DIR")]
    wordlist_dir: Option<PathBuf>,

    /// Guesses allowed per word
    #[arg(long, global = true, env = "LEXIC_MAX_ATTEMPTS", default_value_t = 6)]
    max_attempts: usize,

    /// Words in a daily set
    #[arg(long, global = true, env = "LEXIC_SET_SIZE", default_value_t = 3)]
    set_size: usize,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round in the terminal (default)
    Play {
        /// Language code: en, fr
        #[arg(short, long, default_value = "en")]
        language: Language,

        /// Mode: random, daily-word, daily-set
        #[arg(short, long, default_value = "random")]
        mode: GameMode,

        /// Don't persist daily progress or statistics
        #[arg(long)]
        no_save: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Listen address
        #[arg(short, long, env = "LEXIC_ADDR", default_value = server::DEFAULT_ADDR)]
        addr: SocketAddr,
    },

    /// Run the validation gate on a word
    Check {
        /// Word to check
        word: String,

        /// Language code: en, fr
        #[arg(short, long, default_value = "en")]
        language: Language,

        /// Expected length (defaults to the word's own length)
        #[arg(long)]
        length: Option<usize>,
    },

    /// Print the letter states for a guess against an answer
    Score {
        /// The guess
        guess: String,

        /// The answer
        answer: String,
    },

    /// List the daily word and daily set for a range of UTC days
    Schedule {
        /// Language code: en, fr
        #[arg(short, long, default_value = "en")]
        language: Language,

        /// First UTC day, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        from: Option<NaiveDate>,

        /// Number of days
        #[arg(short = 'n', long, default_value = "7")]
        days: u64,
    },

    /// Show or reset player statistics
    Stats {
        /// Only this language
        #[arg(short, long)]
        language: Option<Language>,

        /// Only this mode
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Reset the selected statistics
        #[arg(long)]
        reset: bool,

        /// Statistics file (default: platform data dir)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        language: Language::En,
        mode: GameMode::Random,
        no_save: false,
    });

    let quiet_default = if matches!(command, Commands::Serve { .. }) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    logging::init(logging::default_level(cli.verbose, quiet_default));

    let config = game_config(cli.max_attempts, cli.set_size)?;

    match command {
        Commands::Play {
            language,
            mode,
            no_save,
        } => {
            let dictionaries = load_dictionaries(cli.wordlist_dir.as_deref())?;
            run_play_command(&dictionaries, language, mode, config, no_save)
        }
        Commands::Serve { addr } => {
            let dictionaries = load_dictionaries(cli.wordlist_dir.as_deref())?;
            run_serve_command(dictionaries, config, addr)
        }
        Commands::Check {
            word,
            language,
            length,
        } => {
            let dictionaries = load_dictionaries(cli.wordlist_dir.as_deref())?;
            run_check_command(&word, language, length, &dictionaries)
        }
        Commands::Score { guess, answer } => {
            let feedback = score_words(&guess, &answer)?;
            print_score(&guess, &answer, &feedback);
            Ok(())
        }
        Commands::Schedule {
            language,
            from,
            days,
        } => {
            let dictionaries = load_dictionaries(cli.wordlist_dir.as_deref())?;
            let from = from.unwrap_or_else(|| Utc::now().date_naive());
            let schedule = build_schedule(
                dictionaries.get(language),
                from,
                days,
                config.set_size,
                days > 1,
            );
            print_schedule(&schedule);
            Ok(())
        }
        Commands::Stats {
            language,
            mode,
            reset,
            file,
        } => run_stats_command(language, mode, reset, file),
    }
}

/// Reject settings the coordinator cannot honour
fn game_config(max_attempts: usize, set_size: usize) -> Result<GameConfig> {
    ensure!(max_attempts >= 1, "--max-attempts must be at least 1");
    ensure!(set_size >= 1, "--set-size must be at least 1");
    Ok(GameConfig {
        max_attempts,
        set_size,
    })
}

fn load_dictionaries(dir: Option<&std::path::Path>) -> Result<Dictionaries> {
    Dictionaries::load(dir).with_context(|| match dir {
        Some(dir) => format!("loading word lists from {}", dir.display()),
        None => "loading embedded word lists".to_string(),
    })
}

fn run_play_command(
    dictionaries: &Dictionaries,
    language: Language,
    mode: GameMode,
    config: GameConfig,
    no_save: bool,
) -> Result<()> {
    let (save_dir, stats_path) = if no_save {
        (None, None)
    } else {
        (storage::default_dir(), StatsBook::default_path())
    };
    let options = PlayOptions {
        language,
        mode,
        config,
        save_dir,
        stats_path,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = run_play(
        stdin.lock(),
        stdout.lock(),
        dictionaries,
        &SystemClock,
        &options,
    )?;
    debug!("play ended: {end:?}");
    Ok(())
}

fn run_serve_command(
    dictionaries: Dictionaries,
    config: GameConfig,
    addr: SocketAddr,
) -> Result<()> {
    let state = Arc::new(AppState::new(Arc::new(dictionaries), config));
    let server_config = ServerConfig {
        addr,
        ..ServerConfig::default()
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime
        .block_on(server::serve(server_config, state))
        .with_context(|| format!("serving on {addr}"))
}

fn run_check_command(
    word: &str,
    language: Language,
    length: Option<usize>,
    dictionaries: &Dictionaries,
) -> Result<()> {
    if let Some(length) = length {
        ensure!(
            (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length),
            "--length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}"
        );
    }
    print_check_result(&check_word(word, language, length, dictionaries));
    Ok(())
}

fn run_stats_command(
    language: Option<Language>,
    mode: Option<GameMode>,
    reset: bool,
    file: Option<PathBuf>,
) -> Result<()> {
    let path = file
        .or_else(StatsBook::default_path)
        .context("no data directory for statistics; pass --file")?;

    if reset {
        reset_stats(&path, language, mode)?;
        println!("Statistics reset.");
        return Ok(());
    }

    for (language, mode, stats) in load_stats(&path, language, mode)? {
        print_stats(language, mode, &stats);
    }
    Ok(())
}
