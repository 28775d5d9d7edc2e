use crate::data::Word;
use crate::data::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback given for a single letter of a guess.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feedback {
    /// The letter is in the objective word at this exact location.
    Correct,
    /// The letter is in the objective word, but somewhere else.
    Present,
    /// The letter is not in the objective word.
    Absent,
}

impl Feedback {
    /// Parses a single feedback symbol.
    ///
    /// * `g` or `2`: [`Feedback::Correct`]
    /// * `y` or `1`: [`Feedback::Present`]
    /// * `.`, `_`, `b`, `x` or `0`: [`Feedback::Absent`]
    pub fn from_symbol(symbol: char) -> Result<Feedback, WordleError> {
        match symbol.to_ascii_lowercase() {
            'g' | '2' => Ok(Feedback::Correct),
            'y' | '1' => Ok(Feedback::Present),
            '.' | '_' | 'b' | 'x' | '0' => Ok(Feedback::Absent),
            _ => Err(WordleError::InvalidFeedback(symbol)),
        }
    }

    /// The coloured square used to display this feedback.
    pub fn square(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }
}

/// Indicates that some input could not be turned into a word or a guess result.
#[derive(Debug, thiserror::Error)]
pub enum WordleError {
    /// A word or feedback string did not have exactly five letters. Holds the given length.
    #[error("expected 5 letters, got {0}")]
    WordLength(usize),
    /// A character outside `a`-`z` was given as a letter.
    #[error("unsupported character {0:?}, only the letters a-z are allowed")]
    UnsupportedCharacter(char),
    /// A character was given that is not a known feedback symbol.
    #[error("unknown feedback symbol {0:?}, use 'g' (correct), 'y' (present) or '.' (absent)")]
    InvalidFeedback(char),
    /// A guess was not written as `word:feedback`.
    #[error("could not read guess {0:?}, expected the form word:feedback")]
    InvalidGuessNotation(String),
    /// Reading a word list failed.
    #[error("failed to read words")]
    Io(#[from] std::io::Error),
}

/// The result of a single guess: the guessed word and the feedback for each of its letters.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResult {
    pub guess: Word,
    /// The feedback for each letter, in the same order as the letters of the guess.
    pub results: [Feedback; WORD_LENGTH],
}

impl GuessResult {
    pub fn new(guess: Word, results: [Feedback; WORD_LENGTH]) -> GuessResult {
        GuessResult { guess, results }
    }

    /// Parses a guess and its feedback symbols, e.g. `("metal", "...g.")`.
    ///
    /// See [`Feedback::from_symbol`] for the accepted symbols.
    pub fn parse(guess: &str, feedback: &str) -> Result<GuessResult, WordleError> {
        let guess = guess.parse::<Word>()?;
        let symbols: Vec<char> = feedback.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(WordleError::WordLength(symbols.len()));
        }
        let mut results = [Feedback::Absent; WORD_LENGTH];
        for (result, symbol) in results.iter_mut().zip(symbols) {
            *result = Feedback::from_symbol(symbol)?;
        }
        Ok(GuessResult { guess, results })
    }

    /// Iterates over `(index, letter, feedback)` for each location in the guess.
    pub fn letters(&self) -> impl Iterator<Item = (usize, char, Feedback)> + '_ {
        self.guess
            .letters()
            .iter()
            .zip(self.results.iter())
            .enumerate()
            .map(|(index, (letter, feedback))| (index, *letter, *feedback))
    }

    /// Returns `true` iff every letter was [`Feedback::Correct`].
    pub fn is_solved(&self) -> bool {
        self.results.iter().all(|result| *result == Feedback::Correct)
    }
}

impl FromStr for GuessResult {
    type Err = WordleError;

    /// Parses the `word:feedback` form, e.g. `metal:...g.`.
    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        match notation.trim().split_once(':') {
            Some((guess, feedback)) => GuessResult::parse(guess, feedback),
            None => Err(WordleError::InvalidGuessNotation(notation.to_string())),
        }
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.guess)?;
        for result in &self.results {
            write!(f, " {}", result.square())?;
        }
        Ok(())
    }
}

/// The history of guesses made so far, oldest first.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardState {
    guesses: Vec<GuessResult>,
}

impl BoardState {
    /// Creates a board with no guesses.
    pub fn new() -> BoardState {
        BoardState::default()
    }

    /// Returns a new board with the given guess appended. This board is left untouched.
    pub fn with_guess(&self, result: GuessResult) -> BoardState {
        let mut guesses = self.guesses.clone();
        guesses.push(result);
        BoardState { guesses }
    }

    /// Returns the guesses, oldest first.
    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }

    /// Returns the number of guesses made.
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Returns `true` iff no guesses have been made.
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }
}

impl FromIterator<GuessResult> for BoardState {
    fn from_iter<I: IntoIterator<Item = GuessResult>>(iter: I) -> Self {
        BoardState {
            guesses: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<GuessResult>> for BoardState {
    fn from(guesses: Vec<GuessResult>) -> Self {
        BoardState { guesses }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, guess) in self.guesses.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", guess)?;
        }
        Ok(())
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Duplicate letters are scored the way the game does: exact matches are claimed first, then
/// each remaining occurrence of a letter in the objective can turn at most one other guessed
/// occurrence [`Feedback::Present`].
///
/// ```
/// use wordle_hint::*;
///
/// let result = get_result_for_guess("mesas", "sassy").unwrap();
/// assert_eq!(
///     result.results,
///     [
///         Feedback::Present,
///         Feedback::Present,
///         Feedback::Correct,
///         Feedback::Absent,
///         Feedback::Absent,
///     ]
/// );
/// ```
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<GuessResult, WordleError> {
    let objective = objective.parse::<Word>()?;
    let guess = guess.parse::<Word>()?;
    let mut results = [Feedback::Absent; WORD_LENGTH];
    let mut unmatched: Vec<char> = Vec::with_capacity(WORD_LENGTH);
    for (index, (guess_letter, objective_letter)) in
        guess.letters().iter().zip(objective.letters()).enumerate()
    {
        if guess_letter == objective_letter {
            results[index] = Feedback::Correct;
        } else {
            unmatched.push(*objective_letter);
        }
    }
    for (index, letter) in guess.letters().iter().enumerate() {
        if results[index] == Feedback::Correct {
            continue;
        }
        if let Some(position) = unmatched.iter().position(|other| other == letter) {
            unmatched.swap_remove(position);
            results[index] = Feedback::Present;
        }
    }
    Ok(GuessResult { guess, results })
}
