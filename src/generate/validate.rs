use crate::collections::square::Coord;
use crate::crossword::{Direction, Grid};
use crate::generate::candidates::Candidate;
use crate::generate::word_coords;

/// The first rule a candidate broke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The word does not fit inside the grid
    OutOfBounds,
    /// A filled cell touches the start or end of the word
    Adjoined,
    /// A filled cell holds a different letter
    Conflict,
    /// A new letter would sit beside an unrelated filled cell
    SideContact,
    /// The word does not cross any placed word
    NoIntersection,
}

/// Checks a candidate against the grid without modifying it.
/// Returns the start cell when every rule passes.
pub(crate) fn validate(
    grid: &Grid,
    letters: &[char],
    candidate: Candidate,
    require_intersection: bool,
) -> Result<Coord, Rejection> {
    let anchor = in_bounds(grid.width(), letters.len(), candidate).ok_or(Rejection::OutOfBounds)?;
    let dimension = candidate.direction.dimension();
    let before = anchor.step(dimension, -1);
    let after = anchor.step(dimension, letters.len() as isize);
    if is_filled(grid, before) || is_filled(grid, after) {
        return Err(Rejection::Adjoined);
    }
    let side = dimension.perpendicular();
    let mut intersections = 0;
    for (coord, &letter) in word_coords(anchor, candidate.direction, letters.len()).zip(letters) {
        match grid[coord].letter() {
            Some(existing) if existing == letter => intersections += 1,
            Some(_) => return Err(Rejection::Conflict),
            None => {
                if is_filled(grid, coord.step(side, -1)) || is_filled(grid, coord.step(side, 1)) {
                    return Err(Rejection::SideContact);
                }
            }
        }
    }
    if require_intersection && intersections == 0 {
        return Err(Rejection::NoIntersection);
    }
    Ok(anchor)
}

fn in_bounds(width: usize, len: usize, candidate: Candidate) -> Option<Coord> {
    let anchor = candidate.anchor()?;
    let end = match candidate.direction {
        Direction::Horizontal => anchor.col() + len,
        Direction::Vertical => anchor.row() + len,
    };
    if anchor.row() < width && anchor.col() < width && end <= width {
        Some(anchor)
    } else {
        None
    }
}

/// off-grid counts as empty
fn is_filled(grid: &Grid, coord: Option<Coord>) -> bool {
    coord
        .and_then(|coord| grid.get(coord))
        .map_or(false, |cell| !cell.is_empty())
}
