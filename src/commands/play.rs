//! Interactive terminal round
//!
//! Plays one round against the core: the secret stays inside the [`Round`] and is
//! only printed once the round is over. Daily rounds are saved after every guess
//! and resumed on the next run of the same UTC day. A daily round left open across
//! UTC midnight is closed without a result and today's round starts in its place.

use crate::core::{Language, fold};
use crate::game::stats::{GameResult, StatsBook};
use crate::game::{Clock, GameConfig, GameMode, GuessError, Round, RoundStatus, storage};
use crate::output::formatters::{format_hint_row, format_row, share_grids};
use crate::wordlists::Dictionaries;
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What to play and where to keep state
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub language: Language,
    pub mode: GameMode,
    pub config: GameConfig,
    /// Directory for saved daily rounds; `None` disables resume
    pub save_dir: Option<PathBuf>,
    /// Statistics file; `None` disables recording
    pub stats_path: Option<PathBuf>,
}

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    Won,
    Lost,
    /// Player left before the round was over
    Quit,
    /// Today's daily round was already finished
    AlreadyFinished,
}

/// Play one round, reading guesses from `input` and writing the board to `out`
///
/// Commands: `quit` leaves (daily progress is kept), `new` starts over in random
/// mode, `help` lists the commands.
///
/// # Errors
///
/// Returns an error if the round cannot start, or on I/O errors reading input,
/// writing output, or persisting state.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    dictionaries: &Dictionaries,
    clock: &dyn Clock,
    options: &PlayOptions,
) -> Result<PlayEnd> {
    let index = dictionaries.get(options.language);

    let resumed = match &options.save_dir {
        Some(dir) => storage::load_round(dir, options.mode, index, clock.today())
            .context("loading saved round")?,
        None => None,
    };

    let mut round = if let Some(round) = resumed {
        if round.is_over() {
            writeln!(
                out,
                "\nYou already finished today's {} ({}).",
                describe(options.mode),
                options.language
            )?;
            print_finish(&mut out, &round)?;
            writeln!(out, "Come back tomorrow for a new puzzle.")?;
            return Ok(PlayEnd::AlreadyFinished);
        }
        writeln!(
            out,
            "\nResuming today's {} ({}).",
            describe(options.mode),
            options.language
        )?;
        round
    } else {
        Round::start(options.mode, index, options.config, clock.today())?
    };

    print_header(&mut out, &round)?;

    loop {
        if round.is_over() {
            break;
        }

        write!(
            out,
            "Guess {}/{}: ",
            round.attempts().len() + 1,
            round.max_attempts()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            save(options, &round)?;
            return Ok(PlayEnd::Quit);
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => {
                save(options, &round)?;
                if options.mode.is_daily() && options.save_dir.is_some() {
                    writeln!(out, "Progress saved. See you later today!")?;
                }
                return Ok(PlayEnd::Quit);
            }
            "help" | "?" => {
                print_help(&mut out)?;
                continue;
            }
            "new" if options.mode == GameMode::Random => {
                writeln!(out, "\n🔄 New game started!")?;
                round = Round::start(options.mode, index, options.config, clock.today())?;
                print_header(&mut out, &round)?;
                continue;
            }
            _ => {}
        }

        let today = clock.today();
        if round.is_stale(today) {
            info!(
                "{} round from {} expired at UTC midnight; starting {today}",
                round.mode(),
                round.day()
            );
            if let Some(dir) = &options.save_dir {
                storage::clear_round(dir, round.mode(), round.language())
                    .with_context(|| format!("clearing saved round in {}", dir.display()))?;
            }
            writeln!(
                out,
                "\n{}",
                format!(
                    "A new UTC day has started: the {} of {} is closed without a result.",
                    describe(options.mode),
                    round.day()
                )
                .yellow()
            )?;
            round = Round::start(options.mode, index, options.config, today)?;
            print_header(&mut out, &round)?;
            continue;
        }

        match round.submit_guess(line, index) {
            Ok(outcome) => {
                writeln!(out, "  {}", format_row(&fold(line), &outcome.letter_states))?;
                if let Some(next) = outcome.next_word {
                    writeln!(
                        out,
                        "\n{} Word {} of {}:",
                        "Solved!".green().bold(),
                        round.active_index() + 1,
                        round.set_total()
                    )?;
                    writeln!(out, "  {}", format_hint_row(next.length, next.first_letter))?;
                }
                save(options, &round)?;
            }
            Err(GuessError::Rejected(rejection)) => {
                debug!("guess '{line}' rejected: {}", rejection.key());
                writeln!(out, "  {}", rejection.to_string().yellow())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    print_finish(&mut out, &round)?;
    record_stats(&mut out, clock, options, &round)?;

    Ok(match round.status() {
        RoundStatus::Won => PlayEnd::Won,
        RoundStatus::Lost | RoundStatus::InProgress => PlayEnd::Lost,
    })
}

const fn describe(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Random => "random word",
        GameMode::DailyWord => "word of the day",
        GameMode::DailySet => "daily set",
    }
}

fn print_header<W: Write>(out: &mut W, round: &Round) -> Result<()> {
    let info = round.start_info();
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    write!(
        out,
        "{} · {} · {} letters",
        describe(round.mode()).bright_cyan().bold(),
        round.language(),
        info.word_length
    )?;
    if let Some(total) = info.set_total {
        write!(out, " · word {} of {total}", round.active_index() + 1)?;
    }
    writeln!(out, " · {} attempts", round.max_attempts())?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "  {}",
        format_hint_row(info.word_length, info.first_letter)
    )?;
    for attempt in round.attempts() {
        writeln!(out, "  {}", format_row(&attempt.word, &attempt.letter_states))?;
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "  Type a word to guess it. Accents are optional.")?;
    writeln!(out, "  quit  leave (daily progress is saved)")?;
    writeln!(out, "  new   start a new random word")?;
    Ok(())
}

fn print_finish<W: Write>(out: &mut W, round: &Round) -> Result<()> {
    let answer = round.revealed_answer().unwrap_or_default();
    writeln!(out)?;
    match round.status() {
        RoundStatus::Won => writeln!(
            out,
            "{}",
            format!("✅ Solved in {} guesses!", round.total_guesses())
                .green()
                .bold()
        )?,
        RoundStatus::Lost | RoundStatus::InProgress => writeln!(
            out,
            "{}",
            format!("❌ Out of attempts after {} guesses", round.total_guesses())
                .red()
                .bold()
        )?,
    }
    writeln!(out, "The answer was: {}", answer.bright_yellow().bold())?;
    let grid = share_grids(
        round
            .attempts_by_word()
            .map(|attempts| attempts.iter().map(|a| &a.letter_states)),
    );
    if !grid.is_empty() {
        writeln!(out, "\n{grid}")?;
    }
    Ok(())
}

fn save(options: &PlayOptions, round: &Round) -> Result<()> {
    if let Some(dir) = &options.save_dir {
        storage::save_round(dir, round)
            .with_context(|| format!("saving round to {}", dir.display()))?;
    }
    Ok(())
}

fn record_stats<W: Write>(
    out: &mut W,
    clock: &dyn Clock,
    options: &PlayOptions,
    round: &Round,
) -> Result<()> {
    let Some(path) = &options.stats_path else {
        return Ok(());
    };
    let now = clock.now();
    let Some(result) = GameResult::from_round(round, now) else {
        return Ok(());
    };

    let mut book = StatsBook::load(path)
        .with_context(|| format!("reading statistics from {}", path.display()))?;
    let (stats, counted) = book.record(&result, options.language, options.mode, now);
    if counted {
        book.save(path)
            .with_context(|| format!("writing statistics to {}", path.display()))?;
    }
    writeln!(
        out,
        "\nPlayed {} · Won {:.0}% · Streak {} (best {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;
    Ok(())
}
