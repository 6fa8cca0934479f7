use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use xword::crossword::WordEntry;

use crate::options::Options;

pub(crate) struct Context {
    options: Options,
    puzzle_path_iter: Option<PuzzlePathIter>,
    rng: Option<StdRng>,
}

impl Context {
    pub fn new(options: Options) -> Result<Self> {
        if let Some(path) = options.output_path() {
            if !path.exists() {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        bail!("Path does not exist: {}", parent.display());
                    }
                }
                fs::create_dir(&path)
                    .with_context(|| format!("Error creating output path: {}", path.display()))?;
            }
        }

        let puzzle_path_iter = options.output_path().map(|path| PuzzlePathIter {
            root: path.into(),
            n: 1,
        });

        let rng = options.shuffle().map(|shuffle| match shuffle.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        });

        Ok(Self {
            options,
            puzzle_path_iter,
            rng,
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Shuffles the words if shuffling is enabled.
    /// Returns false if the order is left as is.
    pub fn shuffle(&mut self, words: &mut [WordEntry]) -> bool {
        match &mut self.rng {
            Some(rng) => {
                words.shuffle(rng);
                true
            }
            None => false,
        }
    }

    pub fn next_puzzle_path(&mut self) -> Option<PathBuf> {
        self.puzzle_path_iter.as_mut()?.next()
    }
}

/// Infinite iterator of paths to save puzzle data, one path per puzzle.
/// Paths are named puzzle_{n}.
/// Existing paths are automatically skipped.
struct PuzzlePathIter {
    root: PathBuf,
    n: usize,
}

impl Iterator for PuzzlePathIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.n == usize::MAX {
                break None;
            }
            let mut path = self.root.clone();
            path.push(format!("puzzle_{}", self.n));
            self.n += 1;
            if !path.exists() {
                break Some(path);
            }
        }
    }
}
