use crate::results::WordleError;
use std::fmt;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// A five-letter word made only of the lowercase letters `a`-`z`.
///
/// Words order lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Word([char; WORD_LENGTH]);

impl Word {
    /// Returns the letters of this word, in order.
    pub fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.0
    }

    /// Returns `true` iff the letter appears anywhere in this word.
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = WordleError;

    /// Parses a word, converting it to lower case.
    ///
    /// The word must be exactly five letters from `a`-`z`. It is never truncated or padded.
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        let num_chars = word.chars().count();
        if num_chars != WORD_LENGTH {
            return Err(WordleError::WordLength(num_chars));
        }
        let mut letters = ['a'; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(word.chars()) {
            let letter = letter.to_ascii_lowercase();
            if !letter.is_ascii_lowercase() {
                return Err(WordleError::UnsupportedCharacter(letter));
            }
            *slot = letter;
        }
        Ok(Word(letters))
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        word.parse()
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Contains all the candidate words for this game.
///
/// Entries that are not five letters from `a`-`z` are skipped and counted rather than rejected.
/// Duplicates and the original order are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
    num_rejected: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Whitespace is trimmed, blank lines are
    /// ignored, and each word is converted to lower case.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader.lines().collect::<Result<Vec<String>, _>>()?;
        Ok(WordBank::from_iterator(lines))
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// Whitespace is trimmed, blank entries are ignored, and each word is converted to lower case.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut bank = WordBank::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            match word.parse::<Word>() {
                Ok(word) => bank.words.push(word),
                Err(err) => {
                    tracing::debug!(word, %err, "skipping malformed word");
                    bank.num_rejected += 1;
                }
            }
        }
        bank
    }

    /// Retrieves the full list of valid words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of valid words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` iff there are no valid words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of non-blank entries that were skipped because they were malformed.
    pub fn num_rejected(&self) -> usize {
        self.num_rejected
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// Parses each entry into a [`Word`], silently dropping any that are malformed.
///
/// Entries are trimmed first and blank ones are ignored, the same as [`WordBank::from_iterator`].
pub(crate) fn parse_candidates<S: AsRef<str>>(dictionary: &[S]) -> Vec<Word> {
    dictionary
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<Word>() {
            Ok(word) => Some(word),
            Err(err) => {
                tracing::debug!(word = entry, %err, "skipping malformed candidate");
                None
            }
        })
        .collect()
}
