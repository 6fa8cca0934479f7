mod coord;
mod vector;

pub use self::coord::Coord;
pub use self::vector::Dimension;

use std::fmt;
use std::fmt::Display;
use std::ops::{Deref, Index, IndexMut};

use itertools::Itertools;
use serde::{Serialize, Serializer};

/// A container of elements represented in a square grid
#[derive(Clone, Debug, PartialEq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a new square with a specified width and fill with the default value
    pub fn with_width(width: usize) -> Square<T>
    where
        T: Clone + Default,
    {
        Self::with_width_and_value(width, Default::default())
    }

    /// Create a new `Square` of a specified width and fill with a specified value
    pub fn with_width_and_value(width: usize, val: T) -> Square<T>
    where
        T: Clone,
    {
        Square {
            width,
            elements: vec![val; width.pow(2)],
        }
    }

    /// Returns the width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if the coordinate lies inside the square
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.width && coord.col() < self.width
    }

    /// Returns the element at `coord`, or `None` if it is off the square
    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self[coord])
        } else {
            None
        }
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        assert!(index < self.elements.len());
        Coord::new(index / self.width, index % self.width)
    }

    /// Returns an iterator over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on zero, but a zero-width square has no elements anyway
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over every element in row-major order, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (self.coord_at(i), e))
    }

    fn index_of(&self, coord: Coord) -> usize {
        assert!(self.contains(coord), "{:?} is outside of the square", coord);
        coord.row() * self.width + coord.col()
    }
}

impl<T> Deref for Square<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.index_of(coord)]
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.index_of(coord);
        &mut self.elements[index]
    }
}

impl<T> Display for Square<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .elements
            .iter()
            .map(|e| e.to_string().len())
            .max()
            .unwrap_or(0);
        for row in self.rows() {
            let line = row.iter().map(|e| format!("{:>1$}", e, len)).join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A square serializes as a list of rows
impl<T> Serialize for Square<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
