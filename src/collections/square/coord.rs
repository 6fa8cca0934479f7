use std::fmt;
use std::fmt::Debug;

use crate::collections::square::Dimension;

/// A `Coord` struct represents coordinates of an element in a `Square`.
///
/// Ordering is row-major: row first, then column.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self([row, col])
    }

    /// Creates a `Coord` from signed components, or `None` if either is negative
    pub fn try_new(row: isize, col: isize) -> Option<Self> {
        if row < 0 || col < 0 {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }

    pub fn row(self) -> usize {
        self.0[0]
    }

    pub fn col(self) -> usize {
        self.0[1]
    }

    /// Moves `distance` cells along `dimension`.
    /// Returns `None` when the result would have a negative component.
    pub fn step(self, dimension: Dimension, distance: isize) -> Option<Self> {
        let (row, col) = (self.row() as isize, self.col() as isize);
        match dimension {
            Dimension::Row => Self::try_new(row, col + distance),
            Dimension::Col => Self::try_new(row + distance, col),
        }
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl From<[usize; 2]> for Coord {
    fn from(array: [usize; 2]) -> Self {
        Self(array)
    }
}
