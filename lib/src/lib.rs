//! Suggests the next guess for five-letter Wordle-style puzzles.
//!
//! The feedback from every guess so far (a [`BoardState`]) is turned into [`Constraints`], the
//! dictionary is narrowed to the words that satisfy them, and the survivors are ranked so that
//! words made of the most common letters come first.
//!
//! ```
//! use wordle_hint::*;
//!
//! let board = BoardState::new().with_guess("arise:..g.y".parse::<GuessResult>().unwrap());
//!
//! let suggestions = suggest(&board, &["ocean", "chief", "quiet", "white"]);
//!
//! let suggestions: Vec<String> = suggestions.iter().map(Word::to_string).collect();
//! assert_eq!(suggestions, vec!["quiet", "chief"]);
//! ```

mod data;
mod engine;
mod ranking;
mod restrictions;
mod results;

pub use data::Word;
pub use data::WordBank;
pub use data::WORD_LENGTH;
pub use engine::*;
pub use ranking::*;
pub use restrictions::*;
pub use results::*;
