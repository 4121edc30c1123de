//! Display functions for command results

use super::formatters::{create_progress_bar, format_row};
use crate::commands::{CheckResult, Schedule};
use crate::core::{Feedback, Language};
use crate::game::GameMode;
use crate::game::stats::GameStats;
use colored::Colorize;

/// Print the letter states for a scored guess
pub fn print_score(guess: &str, answer: &str, feedback: &Feedback) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        guess.to_uppercase().bright_yellow().bold(),
        answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("\n  {}", format_row(guess, feedback));
    println!("  {}   {}", feedback, feedback.to_emoji());
    println!(
        "\n  {} correct, {} present",
        feedback.count_correct(),
        feedback.count_present()
    );
}

/// Print the verdict of the validation gate
pub fn print_check_result(result: &CheckResult) {
    match &result.verdict {
        Ok(word) => println!(
            "{} {} is a valid {}-letter {} guess (normalized: {})",
            "✓".green().bold(),
            word.bright_yellow(),
            result.expected_length,
            result.language,
            result.normalized()
        ),
        Err(rejection) => println!(
            "{} {} rejected [{}]: {}",
            "✗".red().bold(),
            result.word.bright_yellow(),
            rejection.key(),
            rejection
        ),
    }
}

/// Print one statistics bucket
pub fn print_stats(language: Language, mode: GameMode, stats: &GameStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} · {} ",
        "STATISTICS".bright_cyan().bold(),
        language,
        mode
    );
    println!("{}", "═".repeat(60).cyan());

    if stats.games_played == 0 {
        println!("   No games played yet.");
        return;
    }

    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Best streak:     {}", stats.max_streak);
    if let Some(last) = stats.last_played {
        println!("   Last played:     {}", last.format("%Y-%m-%d %H:%M UTC"));
    }

    let most = stats.guess_distribution.values().copied().max().unwrap_or(0);
    if most > 0 {
        println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
        for (&guesses, &count) in &stats.guess_distribution {
            let bar = create_progress_bar(f64::from(count), f64::from(most), 30);
            println!("   {guesses:>2}: {} {count}", bar.green());
        }
    }

    if !stats.recent_games.is_empty() {
        println!("\n🕘 {}", "Recent games:".bright_cyan().bold());
        for game in &stats.recent_games {
            let mark = if game.won { "✓".green() } else { "✗".red() };
            println!(
                "   {mark} {} in {} ({})",
                game.word,
                game.num_guesses,
                game.timestamp.format("%Y-%m-%d")
            );
        }
    }
}

/// Print a daily schedule
pub fn print_schedule(schedule: &Schedule) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(
        " {} ({}) ",
        "DAILY SCHEDULE".bright_cyan().bold(),
        schedule.language
    );
    println!("{}", "═".repeat(70).cyan());

    for entry in &schedule.entries {
        let word = match &entry.word {
            Ok(word) => word.bright_yellow().bold().to_string(),
            Err(err) => err.to_string().red().to_string(),
        };
        let set = match &entry.set {
            Ok(set) => set.join(", "),
            Err(err) => err.to_string().red().to_string(),
        };
        println!("  {}  {word:<12}  {set}", entry.day);
    }

    let repeated = schedule.repeated_words();
    if !repeated.is_empty() {
        println!("\n⚠️  {}", "Repeated daily words:".yellow().bold());
        for (word, count) in repeated {
            println!("   {word}: {count} days");
        }
    }
}
