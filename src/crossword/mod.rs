//! Crossword puzzles: the words going in, the letter grid and the numbered words coming out

pub use self::placed_word::{Direction, PlacedWord};
pub use self::word::{Difficulty, WordEntry};

mod placed_word;
mod word;

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::collections::Square;
use crate::generate::CrosswordGenerator;

/// The letter grid of a crossword
pub type Grid = Square<Cell>;

/// A grid cell: either a letter or empty.
/// Empty cells are rendered as blocked (black) cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Cell(Option<char>);

impl Cell {
    pub(crate) fn filled(letter: char) -> Self {
        Self(Some(letter))
    }

    pub fn letter(self) -> Option<char> {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.unwrap_or('#'))
    }
}

/// The result of one generation run
#[derive(Clone, Debug)]
pub struct Crossword {
    grid: Grid,
    /// sorted by anchor, row first
    words: Vec<PlacedWord>,
    density: f64,
    attempts: u32,
    budget_exhausted: bool,
}

impl Crossword {
    /// Generates a crossword with the default attempt budget
    pub fn generate(words: &[WordEntry], width: usize) -> Self {
        CrosswordGenerator::new(words, width).generate()
    }

    pub(crate) fn new(
        grid: Grid,
        words: Vec<PlacedWord>,
        density: f64,
        attempts: u32,
        budget_exhausted: bool,
    ) -> Self {
        Self {
            grid,
            words,
            density,
            attempts,
            budget_exhausted,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Placed words in numbering order
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub fn across(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words_in(Direction::Horizontal)
    }

    pub fn down(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words_in(Direction::Vertical)
    }

    /// Percentage of filled cells, from 0 to 100
    pub fn density(&self) -> f64 {
        self.density
    }

    /// The number of candidate placements evaluated
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// True if the run stopped early because the attempt budget ran out
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    fn words_in(&self, direction: Direction) -> impl Iterator<Item = &PlacedWord> {
        self.words
            .iter()
            .filter(move |word| word.direction() == direction)
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn clues<'a>(words: impl Iterator<Item = &'a PlacedWord>) -> String {
            words
                .map(|word| format!(" {:>3}. {} ({})", word.number(), word.clue(), word.len()))
                .join("\n")
        }
        write!(f, "{}", self.grid)?;
        writeln!(f, "Across:")?;
        writeln!(f, "{}", clues(self.across()))?;
        writeln!(f, "Down:")?;
        writeln!(f, "{}", clues(self.down()))?;
        write!(f, "{} words, {:.1}% filled", self.words.len(), self.density)
    }
}
