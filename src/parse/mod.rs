//! Parse word lists from text and JSON
//!
//! Text lists hold one entry per line: `WORD | clue [| difficulty]`.
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use crate::crossword::{Difficulty, WordEntry};
use crate::error::{ParseError, ParseErrorType::*, ParseWordListError, WordListFromFileError};

pub use self::json::parse_word_list_json;

mod json;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

const FIELD_SEPARATOR: char = '|';
const COMMENT: char = '#';

/// Reads a word list file, as JSON if the extension is `json`, otherwise as text
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<WordEntry>, WordListFromFileError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let words = if is_json {
        parse_word_list_json(&s)?
    } else {
        parse_word_list(&s).map_err(ParseWordListError::from)?
    };
    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

/// parse a text word list
pub fn parse_word_list(s: &str) -> Result<Vec<WordEntry>> {
    s.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT))
        .map(|(line_number, line)| parse_line(line, line_number))
        .collect()
}

fn parse_line(line: &str, line_number: usize) -> Result<WordEntry> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    // split always yields at least one field
    let word = fields.next().unwrap_or_default();
    let clue = fields
        .next()
        .ok_or_else(|| ParseError::new(MissingClue, word, line_number))?;
    if clue.is_empty() {
        return Err(ParseError::new(EmptyClue, word, line_number));
    }
    let difficulty = match fields.next() {
        None | Some("") => None,
        Some(s) => Some(
            s.parse::<Difficulty>()
                .map_err(|_| ParseError::new(InvalidDifficulty, s, line_number))?,
        ),
    };
    if let Some(extra) = fields.next() {
        return Err(ParseError::new(TooManyFields, extra, line_number));
    }
    let entry = WordEntry::new(word, clue)
        .map_err(|e| ParseError::new(InvalidWord, e.word(), line_number))?;
    Ok(match difficulty {
        Some(difficulty) => entry.with_difficulty(difficulty),
        None => entry,
    })
}
