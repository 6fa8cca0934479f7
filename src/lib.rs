//! Generate crossword puzzles by greedily placing words into a square grid

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod crossword;
pub mod error;
pub mod generate;
pub mod parse;
