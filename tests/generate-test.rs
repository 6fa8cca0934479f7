use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use xword::collections::square::Coord;
use xword::crossword::{Crossword, Direction, PlacedWord, WordEntry};
use xword::generate::CrosswordGenerator;
use xword::parse::read_word_list;

const WIDTHS: &[usize] = &[5, 10, 15, 20];

#[test]
fn test_word_lists() -> Result<()> {
    for path in word_list_paths()? {
        println!("Generating from {}", path.display());
        let words = read_word_list(&path)?;
        assert!(!words.is_empty(), "{}", path.display());
        for &width in WIDTHS {
            let crossword = Crossword::generate(&words, width);
            check_crossword(&crossword, &words);
        }
    }
    Ok(())
}

#[test]
fn deterministic() -> Result<()> {
    let words = read_word_list(project_path("res/test/wordlists/spanish.txt"))?;
    let a = Crossword::generate(&words, 15);
    let b = Crossword::generate(&words, 15);
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.words(), b.words());
    assert_eq!(a.to_string(), b.to_string());
    Ok(())
}

#[test]
fn word_order_changes_the_result() -> Result<()> {
    let mut words = read_word_list(project_path("res/test/wordlists/english.json"))?;
    let forward = Crossword::generate(&words, 15);
    words.reverse();
    let reversed = Crossword::generate(&words, 15);
    // words of equal length keep their input order
    assert_ne!(forward.grid(), reversed.grid());
    Ok(())
}

#[test]
fn shrinking_the_grid_omits_long_words() -> Result<()> {
    let words = read_word_list(project_path("res/test/wordlists/spanish.txt"))?;
    for width in 0..=6 {
        let crossword = Crossword::generate(&words, width);
        assert!(crossword.words().iter().all(|word| word.len() <= width));
        check_crossword(&crossword, &words);
    }
    Ok(())
}

#[test]
fn small_budget_truncates() -> Result<()> {
    let words = read_word_list(project_path("res/test/wordlists/spanish.txt"))?;
    let full = Crossword::generate(&words, 15);
    let truncated = CrosswordGenerator::new(&words, 15).attempt_budget(10).generate();
    assert!(!full.budget_exhausted());
    assert!(truncated.budget_exhausted());
    assert!(truncated.attempts() <= 10);
    assert!(truncated.words().len() <= full.words().len());
    check_crossword(&truncated, &words);
    Ok(())
}

fn check_crossword(crossword: &Crossword, words: &[WordEntry]) {
    let width = crossword.width();
    let grid = crossword.grid();
    let placed = crossword.words();

    // letters agree with the grid and every filled cell belongs to a word
    let mut covered: HashMap<Coord, Vec<usize>> = HashMap::new();
    for (i, word) in placed.iter().enumerate() {
        for (coord, letter) in cells(word).into_iter().zip(word.word().chars()) {
            assert_eq!(Some(letter), grid[coord].letter(), "{} at {:?}", word.word(), coord);
            covered.entry(coord).or_default().push(i);
        }
    }
    let filled = grid.iter().filter(|cell| !cell.is_empty()).count();
    assert_eq!(filled, covered.len());

    // head and tail are never glued to another letter
    for word in placed {
        let dimension = word.direction().dimension();
        let before = word.anchor().step(dimension, -1);
        let after = word.anchor().step(dimension, word.len() as isize);
        for coord in before.into_iter().chain(after) {
            assert!(grid.get(coord).map_or(true, |cell| cell.is_empty()));
        }
    }

    // every word beyond the first crosses another word
    if placed.len() > 1 {
        for (i, word) in placed.iter().enumerate() {
            let crosses = cells(word)
                .iter()
                .any(|coord| covered[coord].iter().any(|&j| j != i));
            assert!(crosses, "{} is not connected", word.word());
        }
    }

    // the longest word that fits is centered
    if let Some(first) = words
        .iter()
        .filter(|word| word.len() <= width)
        .min_by_key(|word| Reverse(word.len()))
    {
        let centered = placed
            .iter()
            .find(|word| word.word() == first.text())
            .expect("longest word placed");
        assert_eq!(Direction::Horizontal, centered.direction());
        assert_eq!(width / 2, centered.row());
        assert_eq!((width - first.len()) / 2, centered.col());
    }

    check_numbering(placed);

    let density = crossword.density();
    assert!((0.0..=100.0).contains(&density));
    if width > 0 {
        assert_eq!(filled as f64 * 100.0 / (width * width) as f64, density);
    }
}

fn check_numbering(placed: &[PlacedWord]) {
    let mut numbers: HashMap<Coord, u32> = HashMap::new();
    let mut last = 0;
    for pair in placed.windows(2) {
        assert!(pair[0].anchor() <= pair[1].anchor());
    }
    for word in placed {
        match numbers.get(&word.anchor()) {
            Some(&number) => assert_eq!(number, word.number()),
            None => {
                assert_eq!(last + 1, word.number());
                last = word.number();
                numbers.insert(word.anchor(), last);
            }
        }
    }
}

fn cells(word: &PlacedWord) -> Vec<Coord> {
    let dimension = word.direction().dimension();
    (0..word.len())
        .map(|i| word.anchor().step(dimension, i as isize).unwrap())
        .collect()
}

fn word_list_paths() -> Result<Vec<PathBuf>> {
    let mut paths: Vec<_> = fs::read_dir(project_path("res/test/wordlists"))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<_, _>>()?;
    paths.sort_unstable();
    Ok(paths)
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
