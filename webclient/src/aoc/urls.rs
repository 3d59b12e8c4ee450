use crate::{error::Result, util, PuzzleRef, Url};
use ::lazy_regex::Lazy;

pub static ROOT_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://adventofcode.com/").expect("Failed to parse `&'static str` root URL")
});

/// URL derivation for one puzzle, relative to a service root.
pub struct PuzzleUrls<'a> {
    root: &'a Url,
    puzzle: PuzzleRef,
}

impl<'a> PuzzleUrls<'a> {
    pub fn new(root: &'a Url, puzzle: PuzzleRef) -> Self {
        Self { root, puzzle }
    }

    fn base_path(&self) -> String {
        format!("{}/day/{}", self.puzzle.year, self.puzzle.day)
    }

    /// `{root}/{year}/day/{day}`
    pub fn description(&self) -> Result<Url> {
        util::join_url(self.root, &self.base_path())
    }

    /// `{root}/{year}/day/{day}/input`
    pub fn input(&self) -> Result<Url> {
        util::join_url(self.root, &format!("{}/input", self.base_path()))
    }

    /// `{root}/{year}/day/{day}/answer`
    pub fn answer(&self) -> Result<Url> {
        util::join_url(self.root, &format!("{}/answer", self.base_path()))
    }
}
