use std::fs;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::TempDir;
use xword::crossword::Crossword;

const GRID_FILE: &str = "grid.json";
const WORDS_FILE: &str = "words.json";
const TEXT_FILE: &str = "puzzle.txt";

/// Collects the files of one puzzle in a temporary directory
/// so that a puzzle folder only appears once it is complete
pub struct PuzzleFolderBuilder {
    temp_dir: TempDir,
}

impl PuzzleFolderBuilder {
    /// `root` must be the directory the folder will be saved in
    /// so the final rename stays on one filesystem
    pub fn new(root: &Path) -> io::Result<Self> {
        let s = Self {
            temp_dir: tempfile::Builder::new().prefix(".puzzle").tempdir_in(root)?,
        };
        Ok(s)
    }

    pub fn write_crossword(&self, crossword: &Crossword) -> io::Result<()> {
        self.write_json(GRID_FILE, crossword.grid())?;
        self.write_json(WORDS_FILE, crossword.words())?;
        let mut file = File::create(self.temp_dir.path().join(TEXT_FILE))?;
        writeln!(file, "{}", crossword)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(self, path: P) -> io::Result<()> {
        fs::rename(self.temp_dir.keep(), path)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> io::Result<()> {
        let file = File::create(self.temp_dir.path().join(name))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use xword::crossword::{Crossword, WordEntry};

    use super::PuzzleFolderBuilder;

    #[test]
    fn save_puzzle_folder() -> anyhow::Result<()> {
        let root = tempfile::tempdir()?;
        let words = vec![
            WordEntry::new("CASA", "Place to live")?,
            WordEntry::new("SOL", "Star of the day")?,
        ];
        let crossword = Crossword::generate(&words, 10);
        let builder = PuzzleFolderBuilder::new(root.path())?;
        builder.write_crossword(&crossword)?;
        let path = root.path().join("puzzle_1");
        builder.save(&path)?;

        let grid: Vec<Vec<Option<char>>> =
            serde_json::from_str(&fs::read_to_string(path.join("grid.json"))?)?;
        assert_eq!(10, grid.len());
        assert_eq!(Some('C'), grid[5][3]);
        assert_eq!(None, grid[0][0]);

        let words: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path.join("words.json"))?)?;
        assert_eq!("SOL", words[1]["word"]);
        assert_eq!("vertical", words[1]["direction"]);
        assert_eq!(2, words[1]["number"]);

        assert!(path.join("puzzle.txt").exists());
        assert_eq!(1, fs::read_dir(root.path())?.count());
        Ok(())
    }
}
