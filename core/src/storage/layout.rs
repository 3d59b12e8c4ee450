use std::path::{Path, PathBuf};

use aocv_webclient::PuzzleRef;

use super::error::Result;
use crate::puzzle::Slot;

/// Root of the per-puzzle directories, `{problems_home}/{year}/{day}/`.
#[derive(Debug, Clone, Copy)]
pub struct ProblemsHome<'a> {
    home: &'a Path,
}

#[derive(Debug, Clone)]
pub struct PuzzleDir {
    dir: PathBuf,
}

impl<'h> ProblemsHome<'h> {
    #[inline]
    pub fn new(problems_home_dir: &'h Path) -> Self {
        Self {
            home: problems_home_dir,
        }
    }

    pub fn dir(&self) -> &Path {
        self.home
    }

    pub fn resolve_puzzle_dir(&self, puzzle: PuzzleRef) -> PuzzleDir {
        let dir = self
            .home
            .join(puzzle.year.to_string())
            .join(puzzle.day.to_string());
        PuzzleDir::new(dir)
    }
}

impl PuzzleDir {
    const DESCRIPTION_FILENAME: &'static str = "README.html";
    const INPUT_FILENAME: &'static str = "input.txt";
    const ANSWERS_DIR_NAME: &'static str = "answers";
    const SOURCE_DIR_NAME: &'static str = "src";
    const BINARY_DIR_NAME: &'static str = "bin";

    pub fn new(puzzle_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: puzzle_dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn description_file(&self) -> PathBuf {
        self.dir.join(Self::DESCRIPTION_FILENAME)
    }

    pub fn input_file(&self) -> PathBuf {
        self.dir.join(Self::INPUT_FILENAME)
    }

    pub fn answers_dir(&self) -> PathBuf {
        self.dir.join(Self::ANSWERS_DIR_NAME)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.dir.join(Self::SOURCE_DIR_NAME)
    }

    pub fn binary_dir(&self) -> PathBuf {
        self.dir.join(Self::BINARY_DIR_NAME)
    }

    /// ```
    /// use aocv_core::{puzzle::Slot, storage::PuzzleDir};
    /// use std::path::Path;
    ///
    /// let d = PuzzleDir::new("problems/2022/1");
    /// assert_eq!(d.answer_file(Slot::new(1)), Path::new("problems/2022/1/answers/answer2.txt"));
    /// assert_eq!(d.source_file(Slot::new(0), "go"), Path::new("problems/2022/1/src/solution1.go"));
    /// ```
    pub fn answer_file(&self, slot: Slot) -> PathBuf {
        self.answers_dir()
            .join(format!("answer{}.txt", slot.level()))
    }

    pub fn source_file(&self, slot: Slot, ext: &str) -> PathBuf {
        self.source_dir()
            .join(format!("solution{}.{}", slot.level(), ext))
    }

    pub fn binary_file(&self, slot: Slot) -> PathBuf {
        self.binary_dir().join(format!(
            "solution{}{}",
            slot.level(),
            std::env::consts::EXE_SUFFIX
        ))
    }

    /// Create `answers/`, `src/` and `bin/`.
    #[must_use]
    pub fn ensure_dirs(&self) -> Result<()> {
        fsutil::mkdir_all_of([self.answers_dir(), self.source_dir(), self.binary_dir()])
    }
}
