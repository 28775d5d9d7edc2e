use crate::data::Word;
use std::cmp::Reverse;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Letters ordered from rarest to most common in typical English text.
pub const LETTER_RANKING: [char; 26] = [
    'q', 'x', 'j', 'z', 'v', 'f', 'w', 'k', 'g', 'b', 'p', 'm', 'h', 'd', 'c', 'y', 'u', 't', 'n',
    'l', 's', 'o', 'i', 'r', 'e', 'a',
];

/// A candidate word along with its commonness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedSuggestion {
    pub word: Word,
    pub score: u32,
}

/// Returns how common the letter is: 0 for the rarest letter up to 25 for the most common.
///
/// Returns `None` for anything outside `a`-`z`.
pub fn letter_score(letter: char) -> Option<u32> {
    LETTER_RANKING
        .iter()
        .position(|ranked| *ranked == letter)
        .map(|index| index as u32)
}

/// Sums the commonness of each letter in the word. Repeated letters count every time.
pub fn word_score(word: &Word) -> u32 {
    word.letters()
        .iter()
        .map(|letter| letter_score(*letter).unwrap_or(0))
        .sum()
}

/// Removes repeated words, keeping the first occurrence of each.
pub fn dedup_candidates(candidates: &[Word]) -> Vec<Word> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .iter()
        .filter(|word| seen.insert(**word))
        .copied()
        .collect()
}

/// Scores and orders the candidates, most common letters first.
///
/// Repeated words are collapsed to one. Words with equal scores are in alphabetical order, so the
/// result depends only on which words are given, not on their order.
pub fn rank_with_scores(candidates: &[Word]) -> Vec<RankedSuggestion> {
    let mut ranked: Vec<RankedSuggestion> = dedup_candidates(candidates)
        .into_iter()
        .map(|word| RankedSuggestion {
            score: word_score(&word),
            word,
        })
        .collect();
    ranked.sort_unstable_by_key(|suggestion| (Reverse(suggestion.score), suggestion.word));
    ranked
}

/// Orders the candidates, most common letters first. See [`rank_with_scores`].
pub fn rank(candidates: &[Word]) -> Vec<Word> {
    rank_with_scores(candidates)
        .into_iter()
        .map(|suggestion| suggestion.word)
        .collect()
}
