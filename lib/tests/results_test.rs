#[macro_use]
extern crate assert_matches;

use wordle_hint::*;

use wordle_hint::Feedback::{Absent, Correct, Present};

#[test]
fn get_result_for_guess_correct() -> Result<(), WordleError> {
    let result = get_result_for_guess("abcbd", "abcbd")?;

    assert_eq!(result.results, [Correct; 5]);
    assert!(result.is_solved());
    Ok(())
}

#[test]
fn get_result_for_guess_partial() -> Result<(), WordleError> {
    let result = get_result_for_guess("mesas", "sassy")?;
    assert_eq!(result.guess.to_string(), "sassy");
    assert_eq!(result.results, [Present, Present, Correct, Absent, Absent]);

    let result = get_result_for_guess("abbey", "babes")?;
    assert_eq!(result.results, [Present, Present, Correct, Correct, Absent]);

    let result = get_result_for_guess("water", "eerie")?;
    assert_eq!(result.results, [Present, Absent, Present, Absent, Absent]);
    assert!(!result.is_solved());
    Ok(())
}

#[test]
fn get_result_for_guess_none_match() -> Result<(), WordleError> {
    let result = get_result_for_guess("abcbd", "efghi")?;

    assert_eq!(result.results, [Absent; 5]);
    Ok(())
}

#[test]
fn get_result_for_guess_invalid_guess() {
    assert_matches!(
        get_result_for_guess("goals", "guess!"),
        Err(WordleError::WordLength(6))
    );
    assert_matches!(
        get_result_for_guess("go4ls", "guess"),
        Err(WordleError::UnsupportedCharacter('4'))
    );
}

#[test]
fn guess_result_parse() -> Result<(), WordleError> {
    let result = GuessResult::parse("Metal", "...G.")?;

    assert_eq!(result.guess.to_string(), "metal");
    assert_eq!(result.results, [Absent, Absent, Absent, Correct, Absent]);
    Ok(())
}

#[test]
fn guess_result_parse_symbol_aliases() -> Result<(), WordleError> {
    let dotted: GuessResult = "round:.y_g.".parse()?;
    let numbered: GuessResult = "round:01020".parse()?;
    let lettered: GuessResult = "round:bYxgB".parse()?;

    assert_eq!(dotted.results, [Absent, Present, Absent, Correct, Absent]);
    assert_eq!(dotted, numbered);
    assert_eq!(dotted, lettered);
    Ok(())
}

#[test]
fn guess_result_parse_errors() {
    assert_matches!(
        "round".parse::<GuessResult>(),
        Err(WordleError::InvalidGuessNotation(_))
    );
    assert_matches!(
        "round:..y.".parse::<GuessResult>(),
        Err(WordleError::WordLength(4))
    );
    assert_matches!(
        "round:..q..".parse::<GuessResult>(),
        Err(WordleError::InvalidFeedback('q'))
    );
    assert_matches!(
        "rounds:.....".parse::<GuessResult>(),
        Err(WordleError::WordLength(6))
    );
}

#[test]
fn guess_result_letters() -> Result<(), WordleError> {
    let result: GuessResult = "films:.y...".parse()?;

    let letters: Vec<(usize, char, Feedback)> = result.letters().collect();

    assert_eq!(
        letters,
        vec![
            (0, 'f', Absent),
            (1, 'i', Present),
            (2, 'l', Absent),
            (3, 'm', Absent),
            (4, 's', Absent),
        ]
    );
    Ok(())
}

#[test]
fn board_display() -> Result<(), WordleError> {
    let board = BoardState::new()
        .with_guess("metal:...g.".parse()?)
        .with_guess("round:...y.".parse()?);

    assert_eq!(
        board.to_string(),
        "metal: ⬛ ⬛ ⬛ 🟩 ⬛\nround: ⬛ ⬛ ⬛ 🟨 ⬛"
    );
    Ok(())
}

#[test]
fn board_with_guess_does_not_modify_original() -> Result<(), WordleError> {
    let empty = BoardState::new();

    let one = empty.with_guess("metal:...g.".parse()?);

    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
    assert_eq!(one.guesses()[0].guess.to_string(), "metal");
    Ok(())
}
