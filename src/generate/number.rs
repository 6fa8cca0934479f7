use ahash::AHashMap;
use itertools::Itertools;

use crate::collections::square::Coord;
use crate::crossword::{Grid, PlacedWord};
use crate::generate::Placement;

/// Assigns crossword numbers in reading order.
///
/// Placements are stably sorted by anchor, row first. Each new anchor takes the
/// next number from 1; an across and a down word sharing an anchor share its number.
pub(crate) fn number_words(placements: Vec<Placement<'_>>) -> Vec<PlacedWord> {
    let mut numbers: AHashMap<Coord, u32> = AHashMap::default();
    let mut next_number = 1;
    placements
        .into_iter()
        .sorted_by_key(|placement| placement.anchor)
        .map(|placement| {
            let number = *numbers.entry(placement.anchor).or_insert_with(|| {
                let number = next_number;
                next_number += 1;
                number
            });
            PlacedWord::new(placement.entry, placement.anchor, placement.direction, number)
        })
        .collect()
}

/// Percentage of filled cells in the grid
pub(crate) fn density(grid: &Grid) -> f64 {
    if grid.is_empty() {
        return 0.0;
    }
    let filled = grid.iter().filter(|cell| !cell.is_empty()).count();
    filled as f64 * 100.0 / grid.len() as f64
}

#[cfg(test)]
mod tests {
    use crate::collections::square::Coord;
    use crate::crossword::Direction::{Horizontal, Vertical};
    use crate::crossword::{Grid, WordEntry};
    use crate::generate::number::{density, number_words};
    use crate::generate::tests::grid_from_rows;
    use crate::generate::Placement;

    #[test]
    fn reading_order_with_shared_anchor() {
        let entries: Vec<WordEntry> = ["ONE", "TWO", "OAT", "TEN"]
            .iter()
            .map(|w| WordEntry::new(*w, "clue").unwrap())
            .collect();
        let placements = vec![
            Placement {
                entry: &entries[0],
                anchor: Coord::new(2, 0),
                direction: Horizontal,
            },
            Placement {
                entry: &entries[1],
                anchor: Coord::new(0, 4),
                direction: Vertical,
            },
            Placement {
                entry: &entries[2],
                anchor: Coord::new(2, 0),
                direction: Vertical,
            },
            Placement {
                entry: &entries[3],
                anchor: Coord::new(0, 1),
                direction: Horizontal,
            },
        ];
        let numbered: Vec<(String, u32)> = number_words(placements)
            .iter()
            .map(|word| (word.word().to_owned(), word.number()))
            .collect();
        assert_eq!(
            vec![
                ("TEN".to_owned(), 1),
                ("TWO".to_owned(), 2),
                ("ONE".to_owned(), 3),
                ("OAT".to_owned(), 3),
            ],
            numbered
        );
    }

    #[test]
    fn no_placements() {
        assert!(number_words(Vec::new()).is_empty());
    }

    #[test]
    fn density_percentage() {
        let grid = grid_from_rows(&["AB", "#C"]);
        assert_eq!(75.0, density(&grid));
        assert_eq!(0.0, density(&Grid::with_width(4)));
        assert_eq!(0.0, density(&Grid::with_width(0)));
    }
}
