use serde::Serialize;

use crate::collections::square::{Coord, Dimension};
use crate::crossword::WordEntry;

/// The direction a word is written in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom down a column
    Vertical,
}

impl Direction {
    /// The grid dimension the word's letters follow
    pub fn dimension(self) -> Dimension {
        match self {
            Direction::Horizontal => Dimension::Row,
            Direction::Vertical => Dimension::Col,
        }
    }
}

/// A word written into the grid, with its crossword number
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedWord {
    word: String,
    display: String,
    clue: String,
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
    number: u32,
}

impl PlacedWord {
    pub(crate) fn new(entry: &WordEntry, anchor: Coord, direction: Direction, number: u32) -> Self {
        Self {
            word: entry.text(),
            display: entry.display().to_owned(),
            clue: entry.clue().to_owned(),
            row: anchor.row(),
            col: anchor.col(),
            direction,
            length: entry.len(),
            number,
        }
    }

    /// The normalized word
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The top-left cell of the word
    pub fn anchor(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// The coordinates of every cell the word covers, from its anchor
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let dimension = self.direction.dimension();
        let anchor = self.anchor();
        (0..self.length).filter_map(move |i| anchor.step(dimension, i as isize))
    }
}
