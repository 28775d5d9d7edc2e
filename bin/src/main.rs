mod config;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_hint::*;

/// Suggests the next Wordle guess from the feedback given so far.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line, or a
    /// JSON array of words if the file name ends in `.json`.
    #[arg(short = 'f', long)]
    words_file: PathBuf,

    /// Path to a TOML file with the guesses made so far.
    #[arg(short = 'b', long, env = "WORDLE_HINT_BOARD")]
    board: Option<PathBuf>,

    /// A guess and its feedback, e.g. `metal:...g.`. Use 'g' for correct, 'y' for present and
    /// '.' for absent. Applied after the board file, in the order given.
    #[arg(short = 'g', long = "guess")]
    guesses: Vec<String>,

    /// Print at most this many suggestions.
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Print the score next to each suggestion.
    #[arg(long)]
    scores: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let start_time = Instant::now();
    let args = Args::parse();

    let word_bank = config::load_word_bank(&args.words_file)?;
    info!(
        file = %args.words_file.display(),
        num_words = word_bank.len(),
        num_rejected = word_bank.num_rejected(),
        "loaded words"
    );

    let board = config::load_board(args.board.as_deref(), &args.guesses)?;
    let suggestions = suggest_from_candidates(&board, &word_bank);

    print_board(&board);
    print_suggestions(&suggestions, args.limit, args.scores);

    info!(
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "command executed"
    );
    Ok(())
}

fn print_board(board: &BoardState) {
    println!("Current board:");
    if !board.is_empty() {
        println!("{}", board);
    }
    println!();
}

fn print_suggestions(suggestions: &[RankedSuggestion], limit: Option<usize>, scores: bool) {
    println!("Next guesses ({}):", suggestions.len());
    let limit = limit.unwrap_or(suggestions.len());
    for suggestion in suggestions.iter().take(limit) {
        if scores {
            println!("{} {}", suggestion.word, suggestion.score);
        } else {
            println!("{}", suggestion.word);
        }
    }
}
