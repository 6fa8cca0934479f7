#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::{bail, Context as _, Result};
use xword::crossword::{Crossword, WordEntry};
use xword::generate::CrosswordGenerator;
use xword::parse::read_word_list;

use crate::context::Context;
use crate::options::Options;
use crate::puzzle_folder_builder::PuzzleFolderBuilder;

mod context;
mod options;
mod puzzle_folder_builder;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let mut context = Context::new(options)?;
    context.start()?;
    Ok(())
}

impl Context {
    fn start(&mut self) -> Result<()> {
        let path = self.options().input().to_owned();
        println!("Reading words from \"{}\"", path.display());
        let mut words = read_word_list(&path)
            .with_context(|| format!("Error reading word list: {}", path.display()))?;
        if words.is_empty() {
            bail!("No words in {}", path.display());
        }
        let count = self.options().count();
        for n in 1..=count {
            self.start_generate(&mut words, n)?;
        }
        Ok(())
    }

    fn start_generate(&mut self, words: &mut [WordEntry], n: u32) -> Result<()> {
        let max_attempts = self.options().max_attempts();
        let min_words = self.options().min_words();
        for attempt in 1..=max_attempts {
            println!(
                "Generating puzzle {}/{}{attempt}",
                n,
                self.options().count(),
                attempt = if attempt == 1 {
                    String::new()
                } else {
                    format!(" (attempt {})", attempt)
                }
            );
            let shuffled = self.shuffle(words);
            let crossword = CrosswordGenerator::new(words, self.options().width())
                .attempt_budget(self.options().attempt_budget())
                .generate();
            println!("{}", crossword);
            if crossword.words().len() >= min_words {
                self.save_crossword(&crossword)?;
                return Ok(());
            }
            println!("Puzzle discarded");
            if !shuffled {
                bail!(
                    "Only {} of {} required words could be placed; \
                     use --shuffle to retry with a different word order",
                    crossword.words().len(),
                    min_words
                );
            }
        }
        bail!(
            "Could not place {} words after {} attempts",
            min_words,
            max_attempts
        )
    }

    fn save_crossword(&mut self, crossword: &Crossword) -> Result<()> {
        let root = match self.options().output_path() {
            None => return Ok(()),
            Some(root) => root.to_owned(),
        };
        let builder = PuzzleFolderBuilder::new(&root)
            .with_context(|| format!("Error creating puzzle folder in {}", root.display()))?;
        builder.write_crossword(crossword)?;
        let path = match self.next_puzzle_path() {
            Some(path) => path,
            None => bail!("No free puzzle path in {}", root.display()),
        };
        builder.save(&path)?;
        println!("Saved puzzle to {}", path.display());
        Ok(())
    }
}
