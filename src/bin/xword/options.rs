use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context as _, Result};
use clap::ArgMatches;
use xword::generate::DEFAULT_ATTEMPT_BUDGET;

const DEFAULT_WIDTH: usize = 15;
const DEFAULT_MAX_ATTEMPTS: u32 = 20;
const DEFAULT_PATH: &str = "output";

#[derive(Clone, Debug)]
pub(crate) struct Options {
    input: PathBuf,
    output_path: Option<PathBuf>,
    width: usize,
    count: u32,
    min_words: usize,
    max_attempts: u32,
    attempt_budget: u32,
    shuffle: Option<Shuffle>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let save = matches.is_present("save");
        if !save && matches.occurrences_of("output_path") != 0 {
            bail!("output path specified but nothing to save");
        }
        let options = Self {
            input: matches
                .value_of("input")
                .context("no input word list")?
                .into(),
            output_path: if save {
                matches.value_of("output_path").map(PathBuf::from)
            } else {
                None
            },
            width: value_or(matches, "width", DEFAULT_WIDTH)?,
            count: value_or(matches, "count", 1)?,
            min_words: value_or(matches, "min_words", 1)?,
            max_attempts: value_or(matches, "max_attempts", DEFAULT_MAX_ATTEMPTS)?,
            attempt_budget: value_or(matches, "attempt_budget", DEFAULT_ATTEMPT_BUDGET)?,
            shuffle: if matches.is_present("shuffle") || matches.is_present("seed") {
                Some(Shuffle {
                    seed: matches
                        .value_of("seed")
                        .map(|s| s.parse::<u64>().with_context(|| format!("invalid seed: {}", s)))
                        .transpose()?,
                })
            } else {
                None
            },
        };
        if options.width == 0 {
            bail!("width must be at least 1");
        }
        if options.max_attempts == 0 {
            bail!("max attempts must be at least 1");
        }
        Ok(options)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The directory to save puzzles in, if saving is enabled
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn attempt_budget(&self) -> u32 {
        self.attempt_budget
    }

    pub fn shuffle(&self) -> Option<&Shuffle> {
        self.shuffle.as_ref()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Shuffle {
    pub seed: Option<u64>,
}

fn value_or<T>(matches: &ArgMatches<'_>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match matches.value_of(name) {
        None => Ok(default),
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid {}: {}", name.replace('_', " "), s)),
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("xword")
        .about("Generate crossword puzzles from a word list")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .required(true)
                .help("word list: \"WORD | clue [| difficulty]\" lines or a JSON array")
                .display_order(1),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .value_name("WIDTH")
                .help("set the width and height of the grid"),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .takes_value(true)
                .help("the number of puzzles to generate"),
        )
        .arg(
            Arg::with_name("min_words")
                .short("m")
                .long("min-words")
                .takes_value(true)
                .help("discard puzzles with fewer placed words"),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .takes_value(true)
                .help("give up on a puzzle after this many discarded attempts"),
        )
        .arg(
            Arg::with_name("attempt_budget")
                .long("attempt-budget")
                .takes_value(true)
                .help("stop placing words after evaluating this many positions"),
        )
        .arg(
            Arg::with_name("shuffle")
                .long("shuffle")
                .help("shuffle the word list before each attempt"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("seed the shuffle (implies --shuffle)"),
        )
        .arg(
            Arg::with_name("save")
                .long("save")
                .help("save the grid, words and a text rendering of each puzzle"),
        )
        .arg(
            Arg::with_name("output_path")
                .long("output-path")
                .short("o")
                .takes_value(true)
                .help("directory to save files")
                .default_value(DEFAULT_PATH),
        )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{clap_app, Options, DEFAULT_WIDTH};

    fn options(args: &[&str]) -> anyhow::Result<Options> {
        let args = std::iter::once("xword").chain(args.iter().copied());
        Options::from_arg_matches(&clap_app().get_matches_from_safe(args)?)
    }

    #[test]
    fn defaults() {
        let options = options(&["-i", "words.txt"]).unwrap();
        assert_eq!(Path::new("words.txt"), options.input());
        assert_eq!(DEFAULT_WIDTH, options.width());
        assert_eq!(1, options.count());
        assert_eq!(1, options.min_words());
        assert!(options.shuffle().is_none());
        assert!(options.output_path().is_none());
    }

    #[test]
    fn save_uses_default_path() {
        let options = options(&["-i", "words.txt", "--save"]).unwrap();
        assert_eq!(Some(Path::new("output")), options.output_path());
    }

    #[test]
    fn output_path_without_save() {
        assert!(options(&["-i", "words.txt", "-o", "puzzles"]).is_err());
    }

    #[test]
    fn seed_implies_shuffle() {
        let options = options(&["-i", "words.txt", "--seed", "42"]).unwrap();
        assert_eq!(Some(42), options.shuffle().unwrap().seed);
    }

    #[test]
    fn invalid_numbers() {
        assert!(options(&["-i", "words.txt", "-w", "ten"]).is_err());
        assert!(options(&["-i", "words.txt", "-w", "0"]).is_err());
        assert!(options(&["-i", "words.txt", "--seed", "-1"]).is_err());
    }
}
