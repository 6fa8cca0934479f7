//! Generic containers used by the crossword engine

pub mod square;

pub use self::square::Square;
