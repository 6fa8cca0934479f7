use itertools::Itertools;

use crate::collections::square::Coord;
use crate::crossword::{Direction, Grid};

/// A proposed start position for a word, not yet validated.
///
/// Components are signed: the centered start of a word longer than the grid
/// lies left of column zero and is left for the validator to reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub row: isize,
    pub col: isize,
    pub direction: Direction,
}

impl Candidate {
    fn new(row: isize, col: isize, direction: Direction) -> Self {
        Self { row, col, direction }
    }

    /// The start cell, if both components are non-negative
    pub fn anchor(self) -> Option<Coord> {
        Coord::try_new(self.row, self.col)
    }
}

/// Lists every position where `letters` could be written, in evaluation order.
///
/// On an empty grid the only candidate is the centered horizontal one.
/// Otherwise each filled cell is visited in row-major order and, for every
/// position of that cell's letter in the word, a horizontal then a vertical
/// start is proposed so the letters line up. Duplicates are kept.
pub(crate) fn find_candidates(grid: &Grid, letters: &[char]) -> Vec<Candidate> {
    if grid.iter().all(|cell| cell.is_empty()) {
        return vec![centered(grid.width(), letters.len())];
    }
    let mut candidates = Vec::new();
    for (coord, cell) in grid.iter_coord() {
        let letter = match cell.letter() {
            Some(letter) => letter,
            None => continue,
        };
        let (row, col) = (coord.row() as isize, coord.col() as isize);
        for offset in letters.iter().positions(|&c| c == letter) {
            let offset = offset as isize;
            if col - offset >= 0 {
                candidates.push(Candidate::new(row, col - offset, Direction::Horizontal));
            }
            if row - offset >= 0 {
                candidates.push(Candidate::new(row - offset, col, Direction::Vertical));
            }
        }
    }
    candidates
}

fn centered(width: usize, len: usize) -> Candidate {
    let (width, len) = (width as isize, len as isize);
    Candidate::new(
        width.div_euclid(2),
        (width - len).div_euclid(2),
        Direction::Horizontal,
    )
}
