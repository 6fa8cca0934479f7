use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidWord, ParseError, ParseErrorType};

/// Characters dropped from a display form when normalizing it
const SEPARATORS: &[char] = &[' ', '-', '\''];

/// A candidate word with its clue, as handed to the generator
///
/// The normalized text is uppercase and contains only alphabetic characters.
/// Its length is counted in characters, not bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct WordEntry {
    text: Box<[char]>,
    display: String,
    clue: String,
    difficulty: Option<Difficulty>,
}

impl WordEntry {
    /// Creates an entry by normalizing `display`
    pub fn new(display: impl Into<String>, clue: impl Into<String>) -> Result<Self, InvalidWord> {
        fn inner(display: String, clue: String) -> Result<WordEntry, InvalidWord> {
            let text = normalize(&display)?;
            Ok(WordEntry {
                text,
                display,
                clue,
                difficulty: None,
            })
        }
        inner(display.into(), clue.into())
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// The normalized letters of the word
    pub fn letters(&self) -> &[char] {
        &self.text
    }

    /// The normalized word as a string
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed entry; normalization rejects empty words
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

fn normalize(display: &str) -> Result<Box<[char]>, InvalidWord> {
    let mut text = Vec::with_capacity(display.len());
    for c in display.chars().filter(|c| !SEPARATORS.contains(c)) {
        if !c.is_alphabetic() {
            return Err(InvalidWord::new(
                display,
                format!("'{}' is not a letter", c),
            ));
        }
        text.extend(c.to_uppercase());
    }
    if text.is_empty() {
        return Err(InvalidWord::new(display, "no letters"));
    }
    Ok(text.into_boxed_slice())
}

/// An optional difficulty tag carried through from the word source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let difficulty = match s.to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => return Err(ParseError::from_type(ParseErrorType::InvalidDifficulty)),
        };
        Ok(difficulty)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", s)
    }
}
