use crate::data::parse_candidates;
use crate::data::Word;
use crate::ranking::dedup_candidates;
use crate::ranking::rank_with_scores;
use crate::ranking::RankedSuggestion;
use crate::restrictions::filter_candidates;
use crate::restrictions::Constraints;
use crate::results::BoardState;

/// Suggests the next guesses for the board, best first.
///
/// Dictionary entries that are not five letters from `a`-`z` are skipped. Neither the board nor
/// the dictionary is modified, and an empty result is a valid answer.
///
/// ```
/// use wordle_hint::*;
///
/// let board: BoardState = ["metal:...g.", "round:...y."]
///     .iter()
///     .map(|guess| guess.parse::<GuessResult>())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// let suggestions = suggest(&board, &["chain", "japan", "giant", "pinky"]);
///
/// assert_eq!(suggestions, vec!["japan".parse::<Word>().unwrap()]);
/// ```
pub fn suggest<S: AsRef<str>>(board: &BoardState, dictionary: &[S]) -> Vec<Word> {
    suggest_with_scores(board, dictionary)
        .into_iter()
        .map(|suggestion| suggestion.word)
        .collect()
}

/// Same as [`suggest`], but keeps the score of each suggestion.
pub fn suggest_with_scores<S: AsRef<str>>(
    board: &BoardState,
    dictionary: &[S],
) -> Vec<RankedSuggestion> {
    let candidates = parse_candidates(dictionary);
    tracing::trace!(
        num_entries = dictionary.len(),
        num_valid = candidates.len(),
        "parsed dictionary"
    );
    suggest_from_candidates(board, &candidates)
}

/// Same as [`suggest_with_scores`], for words that have already been parsed, e.g. from a
/// [`WordBank`](crate::WordBank).
pub fn suggest_from_candidates(board: &BoardState, candidates: &[Word]) -> Vec<RankedSuggestion> {
    let constraints = Constraints::derive(board);
    let survivors = filter_candidates(candidates, &constraints);
    let unique = dedup_candidates(&survivors);
    tracing::debug!(
        num_candidates = candidates.len(),
        num_survivors = survivors.len(),
        num_unique = unique.len(),
        "filtered candidates"
    );
    rank_with_scores(&unique)
}
