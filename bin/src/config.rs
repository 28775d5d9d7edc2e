use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use wordle_hint::{BoardState, GuessResult, WordBank};

/// A board file, e.g.:
///
/// ```toml
/// [[guesses]]
/// word = "metal"
/// feedback = "...g."
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BoardConfig {
    #[serde(default)]
    pub guesses: Vec<GuessConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuessConfig {
    pub word: String,
    pub feedback: String,
}

impl BoardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read board file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse TOML from {}", path.display()))
    }

    pub fn to_guess_results(&self) -> Result<Vec<GuessResult>> {
        self.guesses
            .iter()
            .enumerate()
            .map(|(index, guess)| {
                GuessResult::parse(&guess.word, &guess.feedback).with_context(|| {
                    format!(
                        "invalid guess #{} ({} = {})",
                        index + 1,
                        guess.word,
                        guess.feedback
                    )
                })
            })
            .collect()
    }
}

/// Builds the board from the optional board file followed by the `word:feedback` guesses.
pub fn load_board(board_file: Option<&Path>, guesses: &[String]) -> Result<BoardState> {
    let mut results = match board_file {
        Some(path) => BoardConfig::load(path)?.to_guess_results()?,
        None => Vec::new(),
    };
    for guess in guesses {
        let result = guess
            .parse::<GuessResult>()
            .with_context(|| format!("invalid --guess {}", guess))?;
        results.push(result);
    }
    Ok(BoardState::from(results))
}

/// Loads the dictionary: a JSON array of strings if the file ends in `.json`, otherwise one word
/// per line.
pub fn load_word_bank(path: &Path) -> Result<WordBank> {
    let is_json = path
        .extension()
        .map_or(false, |extension| extension.eq_ignore_ascii_case("json"));
    if is_json {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read words file {}", path.display()))?;
        let words: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON from {}", path.display()))?;
        return Ok(WordBank::from_iterator(words));
    }
    let file = fs::File::open(path)
        .with_context(|| format!("failed to open words file {}", path.display()))?;
    WordBank::from_reader(io::BufReader::new(file))
        .with_context(|| format!("failed to read words file {}", path.display()))
}
