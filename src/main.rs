//! Hangman - CLI
//!
//! Thin interactive wrapper around the engine: load the catalog once, fetch
//! a word, play guesses until the round ends, record the score.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hangman_engine::catalog::{WordCatalog, loader};
use hangman_engine::ledger::ScoreLedger;
use hangman_engine::round::{PLACEHOLDER, RoundEngine};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Word-guessing game over a line-oriented word list",
    version
)]
struct Cli {
    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Secret word length (default: random between 5 and 10 each round)
    #[arg(short = 'l', long)]
    length: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut catalog = load_catalog(cli.wordlist.as_deref());
    let mut ledger = ScoreLedger::new();
    let mut played: Vec<String> = Vec::new();

    println!("\n{}", "═".repeat(50).cyan());
    println!("{}", "  H A N G M A N".bold());
    println!("{}", "═".repeat(50).cyan());

    loop {
        let length = cli
            .length
            .unwrap_or_else(|| rand::rng().random_range(5..=10));

        let Some(word) = catalog.fetch_word(length) else {
            println!(
                "\n{}",
                format!("No unused {length}-letter word left in the catalog.").yellow()
            );
            break;
        };
        let secret = word.to_string();

        let score = play_round(&secret)?;
        ledger.save(secret.clone(), score);
        played.push(secret);

        if ask("Play again? (y/n)")?.to_lowercase() != "y" {
            break;
        }
    }

    print_scoreboard(&ledger, &played);
    Ok(())
}

/// Load the catalog from the given file, or fall back to the embedded list.
///
/// An unreadable file is reported and leaves an empty catalog behind, so
/// the process keeps running in a degraded state instead of crashing.
fn load_catalog(path: Option<&Path>) -> WordCatalog {
    match path {
        Some(path) => match loader::load_from_file(path) {
            Ok(words) => WordCatalog::new(words),
            Err(err) => {
                eprintln!(
                    "{}",
                    format!("Failed to read word list {}: {err}", path.display()).red()
                );
                WordCatalog::new(Vec::new())
            }
        },
        None => WordCatalog::new(loader::embedded_words()),
    }
}

/// Play one round against `secret`, returning the final score.
fn play_round(secret: &str) -> Result<f64> {
    let mut engine = RoundEngine::new();
    let mut clue = engine.start_round(secret);

    println!(
        "\nA new word with {} letters. You have {} trials.",
        secret.chars().count(),
        engine.remaining_trials()
    );

    loop {
        println!(
            "\n  {}    trials: {}  score: {}",
            render_clue(&clue),
            engine.remaining_trials().to_string().bold(),
            engine.score()
        );

        let input = ask("Guess a letter")?;
        let mut chars = input.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            println!("{}", "Enter a single letter.".yellow());
            continue;
        };

        match engine.guess(secret, &clue, letter) {
            Ok(updated) => clue = updated,
            Err(err) => {
                println!("{}", err.to_string().red());
                continue;
            }
        }

        if clue == secret {
            println!(
                "\n{} {} {}",
                "Solved!".green().bold(),
                secret.to_uppercase().bold(),
                format!("(score {})", engine.score()).green()
            );
            break;
        }

        if engine.remaining_trials() == 0 {
            println!(
                "\n{} The word was {}.",
                "Out of trials.".red().bold(),
                secret.to_uppercase().bold()
            );
            break;
        }
    }

    Ok(engine.score())
}

/// Render the clue with spacing: revealed letters green, masks dimmed.
fn render_clue(clue: &str) -> String {
    clue.chars()
        .map(|c| {
            if c == PLACEHOLDER {
                c.to_string().bright_black().to_string()
            } else {
                c.to_string().green().bold().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the scores recorded this session, in play order.
fn print_scoreboard(ledger: &ScoreLedger, played: &[String]) {
    if played.is_empty() {
        return;
    }

    println!("\n{}", "─".repeat(50).cyan());
    println!("Session scores");
    for word in played {
        println!("  {:<12} {:>6.1}", word, ledger.lookup(word));
    }
    println!();
}

/// Prompt for a line of input and return it trimmed.
fn ask(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
