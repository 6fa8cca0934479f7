use serde::Deserialize;

use crate::crossword::{Difficulty, WordEntry};
use crate::error::{ParseError, ParseErrorType, ParseWordListError};

#[derive(Deserialize)]
struct WordRecord {
    word: String,
    clue: String,
    #[serde(default)]
    difficulty: Option<Difficulty>,
}

/// parse a JSON array of `{"word", "clue", "difficulty"?}` objects
pub fn parse_word_list_json(s: &str) -> Result<Vec<WordEntry>, ParseWordListError> {
    let records: Vec<WordRecord> = serde_json::from_str(s)?;
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| -> Result<_, ParseWordListError> {
            let entry = WordEntry::new(record.word, record.clue)
                .map_err(|e| ParseError::new(ParseErrorType::InvalidWord, e.word(), i))?;
            Ok(match record.difficulty {
                Some(difficulty) => entry.with_difficulty(difficulty),
                None => entry,
            })
        })
        .collect()
}
