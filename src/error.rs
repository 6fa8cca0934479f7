use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid word \"{}\": {}", word, msg)]
pub struct InvalidWord {
    word: String,
    msg: String,
}

impl InvalidWord {
    pub(crate) fn new(word: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            msg: msg.into(),
        }
    }

    /// The rejected word as it was given
    pub fn word(&self) -> &str {
        &self.word
    }
}

#[derive(Error, Debug)]
pub enum WordListFromFileError {
    #[error("error reading word list file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseWordListError),
}

#[derive(Debug, Error)]
pub enum ParseWordListError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid JSON word list")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseErrorType,
    token: Option<String>,
    index: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParseErrorType, token: impl Display, index: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            index: Some(index),
        }
    }

    pub(crate) const fn from_type(error_type: ParseErrorType) -> Self {
        Self {
            error_type,
            token: None,
            index: None,
        }
    }

    pub fn error_type(&self) -> ParseErrorType {
        self.error_type
    }

    /// The line number (text lists) or array index (JSON lists) of the offending entry
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseErrorType {
    EmptyClue,
    InvalidDifficulty,
    InvalidWord,
    MissingClue,
    TooManyFields,
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorType::EmptyClue => "Empty clue",
            ParseErrorType::InvalidDifficulty => "Invalid difficulty",
            ParseErrorType::InvalidWord => "Invalid word",
            ParseErrorType::MissingClue => "Missing clue",
            ParseErrorType::TooManyFields => "Too many fields",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(index) = &self.index {
            write!(f, " at {}", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ParseError, ParseErrorType};

    #[test]
    fn display_with_token() {
        let error = ParseError::new(ParseErrorType::InvalidDifficulty, "extreme", 4);
        assert_eq!("Invalid difficulty: \"extreme\" at 4", error.to_string());
    }

    #[test]
    fn display_type_only() {
        let error = ParseError::from_type(ParseErrorType::MissingClue);
        assert_eq!("Missing clue", error.to_string());
    }
}
