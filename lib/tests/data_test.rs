use wordle_hint::*;

use std::io::Cursor;
use std::result::Result;

fn to_strings(words: &[Word]) -> Vec<String> {
    words.iter().map(Word::to_string).collect()
}

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), WordleError> {
    let cursor = Cursor::new(String::from("\n\nworda\n wordb\n"));

    let word_bank = WordBank::from_reader(cursor)?;

    assert_eq!(word_bank.len(), 2);
    assert_eq!(to_strings(&word_bank), vec!["worda", "wordb"]);
    assert_eq!(word_bank.num_rejected(), 0);
    Ok(())
}

#[test]
fn word_bank_from_iterator_succeeds() {
    let word_bank = WordBank::from_iterator(vec!["", "worda", "Wordb "]);

    assert_eq!(word_bank.len(), 2);
    assert_eq!(to_strings(&word_bank), vec!["worda", "wordb"]);
}

#[test]
fn word_bank_from_string_iterator_succeeds() {
    let word_bank = WordBank::from_iterator(vec![
        "".to_string(),
        "worda".to_string(),
        "Wordb ".to_string(),
    ]);

    assert_eq!(word_bank.len(), 2);
    assert_eq!(to_strings(word_bank.words()), vec!["worda", "wordb"]);
}

#[test]
fn word_bank_skips_malformed_words() {
    let word_bank = WordBank::from_iterator(["longword", "short", "tiny", "wor d", "évent"]);

    assert_eq!(to_strings(&word_bank), vec!["short"]);
    assert_eq!(word_bank.num_rejected(), 4);
}

#[test]
fn word_bank_keeps_duplicates() {
    let word_bank = WordBank::from_iterator(["arise", "ARISE", "arise"]);

    assert_eq!(word_bank.len(), 3);
}

#[test]
fn suggest_from_word_bank() -> Result<(), WordleError> {
    let word_bank = WordBank::from_reader(Cursor::new("pinto\narise\njazzy\narise\n"))?;
    let board = BoardState::new().with_guess("cloud:.....".parse()?);

    let suggestions = suggest_from_candidates(&board, &word_bank);

    // 'pinto' has an 'o', which the board excludes.
    let ranked: Vec<(String, u32)> = suggestions
        .iter()
        .map(|suggestion| (suggestion.word.to_string(), suggestion.score))
        .collect();
    assert_eq!(ranked, vec![("arise".to_string(), 114), ("jazzy".to_string(), 48)]);
    Ok(())
}

#[test]
fn suggest_matches_word_bank_for_padded_entries() -> Result<(), WordleError> {
    let entries = [" arise", "pinto\r", "jazzy"];
    let board = BoardState::new();

    let from_strings = suggest(&board, &entries);
    let from_bank: Vec<Word> = suggest_from_candidates(&board, &WordBank::from_iterator(entries))
        .into_iter()
        .map(|suggestion| suggestion.word)
        .collect();

    assert_eq!(to_strings(&from_strings), vec!["arise", "pinto", "jazzy"]);
    assert_eq!(from_strings, from_bank);
    Ok(())
}
