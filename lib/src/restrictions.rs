use crate::data::Word;
use crate::data::WORD_LENGTH;
use crate::results::BoardState;
use crate::results::Feedback;
use rayon::prelude::*;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything learned from the feedback on a board so far.
///
/// These are always derived fresh from a [`BoardState`] with [`Constraints::derive`]. The fields
/// are public so callers can also build constraints by hand.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraints {
    /// The letter that must be at each location, if known.
    pub known_positions: [Option<char>; WORD_LENGTH],
    /// Letters that must not be anywhere in the word.
    pub excluded_letters: BTreeSet<char>,
    /// Letters that must not be at each location.
    pub position_exclusions: [BTreeSet<char>; WORD_LENGTH],
    /// Letters that must be somewhere in the word.
    pub required_letters: BTreeSet<char>,
}

impl Constraints {
    /// Derives the constraints implied by every guess on the board.
    ///
    /// * A location's known letter comes from the last guess that was [`Feedback::Correct`] there.
    /// * A letter that was [`Feedback::Absent`] anywhere is excluded, unless it is the known letter
    ///   of any location. This is checked against the whole board by letter alone, so a letter
    ///   that is correct in one place is never excluded, even if a duplicate of it was absent.
    /// * A letter that was [`Feedback::Present`] is required, and is forbidden at that location.
    ///
    /// Contradictory boards are not rejected; the rules above resolve them.
    pub fn derive(board: &BoardState) -> Constraints {
        let mut constraints = Constraints::default();
        for guess in board.guesses() {
            for (index, letter, feedback) in guess.letters() {
                match feedback {
                    Feedback::Correct => constraints.known_positions[index] = Some(letter),
                    Feedback::Present => {
                        constraints.position_exclusions[index].insert(letter);
                        constraints.required_letters.insert(letter);
                    }
                    Feedback::Absent => {}
                }
            }
        }
        // Exclusions can only be settled once every known location has been seen.
        for guess in board.guesses() {
            for (_, letter, feedback) in guess.letters() {
                if feedback == Feedback::Absent && !constraints.is_known_letter(letter) {
                    constraints.excluded_letters.insert(letter);
                }
            }
        }
        tracing::debug!(
            num_guesses = board.len(),
            known = ?constraints.known_positions,
            excluded = ?constraints.excluded_letters,
            required = ?constraints.required_letters,
            "derived constraints"
        );
        constraints
    }

    /// Returns `true` iff no constraints are known.
    pub fn is_empty(&self) -> bool {
        self.known_positions.iter().all(Option::is_none)
            && self.excluded_letters.is_empty()
            && self.position_exclusions.iter().all(BTreeSet::is_empty)
            && self.required_letters.is_empty()
    }

    /// Returns `true` iff the letter must be at some location.
    pub fn is_known_letter(&self, letter: char) -> bool {
        self.known_positions.contains(&Some(letter))
    }

    /// Returns `true` iff the given word satisfies all of these constraints.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.has_no_excluded_letters(word)
            && self.matches_known_positions(word)
            && self.respects_position_exclusions(word)
            && self.has_required_letters(word)
    }

    fn has_no_excluded_letters(&self, word: &Word) -> bool {
        word.letters()
            .iter()
            .all(|letter| !self.excluded_letters.contains(letter))
    }

    fn matches_known_positions(&self, word: &Word) -> bool {
        self.known_positions
            .iter()
            .zip(word.letters())
            .all(|(known, letter)| known.map_or(true, |known| known == *letter))
    }

    fn respects_position_exclusions(&self, word: &Word) -> bool {
        self.position_exclusions
            .iter()
            .zip(word.letters())
            .all(|(forbidden, letter)| !forbidden.contains(letter))
    }

    fn has_required_letters(&self, word: &Word) -> bool {
        self.required_letters
            .iter()
            .all(|letter| word.contains(*letter))
    }
}

/// Returns the candidates that satisfy the constraints, in their original order.
///
/// The check runs in parallel, but the output order always matches the input order.
pub fn filter_candidates(candidates: &[Word], constraints: &Constraints) -> Vec<Word> {
    if constraints.is_empty() {
        return candidates.to_vec();
    }
    candidates
        .par_iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .copied()
        .collect()
}
