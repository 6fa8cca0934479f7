//! Generate crosswords by greedy word placement
//!
//! Words are tried longest first. Each word is written at the first legal
//! candidate position, or dropped if there is none. Earlier placements are
//! never revisited, so the result depends only on the word order and grid width.

use crate::collections::square::Coord;
use crate::crossword::{Cell, Crossword, Direction, Grid, WordEntry};

use self::candidates::find_candidates;
use self::number::{density, number_words};
use self::sequence::order_words;
use self::validate::validate;

mod candidates;
mod number;
mod sequence;
mod validate;

/// Ceiling on candidate evaluations in a single run
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 100_000;

pub struct CrosswordGenerator<'a> {
    words: &'a [WordEntry],
    width: usize,
    attempt_budget: u32,
}

impl<'a> CrosswordGenerator<'a> {
    pub fn new(words: &'a [WordEntry], width: usize) -> Self {
        Self {
            words,
            width,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
        }
    }

    /// Sets the maximum number of candidate positions evaluated before the run stops
    pub fn attempt_budget(&mut self, attempt_budget: u32) -> &mut Self {
        self.attempt_budget = attempt_budget;
        self
    }

    pub fn generate(&self) -> Crossword {
        let words = order_words(self.words);
        let mut placer = Placer::new(self.width, self.attempt_budget);
        placer.run(&words);
        let Placer {
            grid,
            placements,
            attempts,
            budget_exhausted,
            ..
        } = placer;
        let placed_words = number_words(placements);
        let density = density(&grid);
        info!(
            "Placed {}/{} words in a {}x{} grid ({:.1}% filled, {} attempts)",
            placed_words.len(),
            words.len(),
            self.width,
            self.width,
            density,
            attempts
        );
        Crossword::new(grid, placed_words, density, attempts, budget_exhausted)
    }
}

/// A word committed to the grid, before numbering
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placement<'a> {
    pub entry: &'a WordEntry,
    pub anchor: Coord,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    /// trying to place the word at this index
    Placing(usize),
    Done,
}

enum Outcome<'a> {
    Placed(Placement<'a>),
    Skipped,
    BudgetExhausted,
}

/// Mutable state of one generation run
struct Placer<'a> {
    grid: Grid,
    placements: Vec<Placement<'a>>,
    attempts: u32,
    attempt_budget: u32,
    budget_exhausted: bool,
}

impl<'a> Placer<'a> {
    fn new(width: usize, attempt_budget: u32) -> Self {
        Self {
            grid: Grid::with_width(width),
            placements: Vec::new(),
            attempts: 0,
            attempt_budget,
            budget_exhausted: false,
        }
    }

    fn run(&mut self, words: &[&'a WordEntry]) {
        let mut state = State::Placing(0);
        while let State::Placing(index) = state {
            state = self.step(words, index);
        }
    }

    fn step(&mut self, words: &[&'a WordEntry], index: usize) -> State {
        let word = match words.get(index) {
            Some(&word) => word,
            None => return State::Done,
        };
        match self.place(word) {
            Outcome::Placed(placement) => debug!(
                "Placed {} {:?} at {:?}",
                word.text(),
                placement.direction,
                placement.anchor
            ),
            Outcome::Skipped => debug!("Skipped {}, no legal position", word.text()),
            Outcome::BudgetExhausted => {
                warn!(
                    "Attempt budget of {} exhausted, {} words not attempted",
                    self.attempt_budget,
                    words.len() - index
                );
                return State::Done;
            }
        }
        State::Placing(index + 1)
    }

    /// Writes the word at its first legal candidate
    fn place(&mut self, word: &'a WordEntry) -> Outcome<'a> {
        let letters = word.letters();
        let require_intersection = !self.placements.is_empty();
        for candidate in find_candidates(&self.grid, letters) {
            if self.attempts >= self.attempt_budget {
                self.budget_exhausted = true;
                return Outcome::BudgetExhausted;
            }
            self.attempts += 1;
            match validate(&self.grid, letters, candidate, require_intersection) {
                Ok(anchor) => {
                    let placement = Placement {
                        entry: word,
                        anchor,
                        direction: candidate.direction,
                    };
                    self.write(placement);
                    return Outcome::Placed(placement);
                }
                Err(rejection) => trace!("{} at {:?}: {:?}", word.text(), candidate, rejection),
            }
        }
        Outcome::Skipped
    }

    fn write(&mut self, placement: Placement<'a>) {
        let letters = placement.entry.letters();
        let coords = word_coords(placement.anchor, placement.direction, letters.len());
        for (coord, &letter) in coords.zip(letters) {
            debug_assert!(self.grid[coord]
                .letter()
                .map_or(true, |existing| existing == letter));
            self.grid[coord] = Cell::filled(letter);
        }
        self.placements.push(placement);
    }
}

/// The cells covered by a word of length `len` starting at `anchor`
pub(crate) fn word_coords(
    anchor: Coord,
    direction: Direction,
    len: usize,
) -> impl Iterator<Item = Coord> {
    let dimension = direction.dimension();
    (0..len).filter_map(move |i| anchor.step(dimension, i as isize))
}
