use aocv_webclient::{Client, PuzzleRef, PuzzleUrls, Sanitizer};

use crate::error::*;
use crate::puzzle::{PuzzleInstance, Slot};
use crate::solution::SolutionRunner;
use crate::storage::{self, ProblemsHome, PuzzleDir};

/// Turns a [`PuzzleRef`] into a [`PuzzleInstance`]: cached description and input,
/// then one candidate per slot from the local solutions.
pub struct Pipeline<'a> {
    cli: &'a dyn Client,
    home: ProblemsHome<'a>,
    runner: &'a SolutionRunner,
    source_ext: &'a str,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        cli: &'a dyn Client,
        home: ProblemsHome<'a>,
        runner: &'a SolutionRunner,
        source_ext: &'a str,
    ) -> Self {
        Self {
            cli,
            home,
            runner,
            source_ext,
        }
    }

    pub fn puzzle_dir(&self, puzzle: PuzzleRef) -> PuzzleDir {
        self.home.resolve_puzzle_dir(puzzle)
    }

    /// Sanitized description page, fetched once.
    pub async fn resolve_description(&self, puzzle: PuzzleRef, loc: &PuzzleDir) -> Result<String> {
        let root = self.cli.root_url();
        storage::read_through(loc.description_file(), || async move {
            let url = PuzzleUrls::new(root, puzzle).description()?;
            log::info!("Fetching {}", url);
            let page = self.cli.fetch(&url).await?;
            let prose = Sanitizer::new(root.clone()).sanitize(&page)?;
            Ok::<_, Error>(prose)
        })
        .await
        .with_context(|| format!("Failed to resolve description of {}", puzzle))
    }

    /// Puzzle input, fetched once and stored verbatim.
    pub async fn resolve_input(&self, puzzle: PuzzleRef, loc: &PuzzleDir) -> Result<String> {
        let root = self.cli.root_url();
        storage::read_through(loc.input_file(), || async move {
            let url = PuzzleUrls::new(root, puzzle).input()?;
            log::info!("Fetching {}", url);
            let input = self.cli.fetch(&url).await?;
            Ok::<_, Error>(input)
        })
        .await
        .with_context(|| format!("Failed to resolve input of {}", puzzle))
    }

    /// Create the puzzle directories and make sure description and input are cached.
    pub async fn prefetch(&self, puzzle: PuzzleRef) -> Result<(PuzzleDir, String, String)> {
        let loc = self.puzzle_dir(puzzle);
        loc.ensure_dirs()
            .with_context(|| format!("Failed to prepare directories of {}", puzzle))?;

        let description = self.resolve_description(puzzle, &loc).await?;
        let input = self.resolve_input(puzzle, &loc).await?;
        Ok((loc, description, input))
    }

    /// Compile and run the solution for `slot`; `""` when there is no usable answer.
    pub async fn solve_slot(&self, loc: &PuzzleDir, slot: Slot) -> String {
        let src = loc.source_file(slot, self.source_ext);
        let bin = loc.binary_file(slot);

        // a prebuilt binary still runs without its source
        if !src.is_file() {
            log::info!("No solution source: {}", src.display());
        } else if let Err(e) = self.runner.compile(&src, &bin).await {
            log::warn!("{:#}", e);
        }

        let answer = self.runner.execute(&bin, loc.input_file()).await;
        if !answer.is_empty() {
            if let Err(e) = fsutil::write_with_mkdir(loc.answer_file(slot), &answer) {
                log::warn!("Failed to save answer: {}", e);
            }
        }
        answer
    }

    pub async fn build(&self, puzzle: PuzzleRef) -> Result<PuzzleInstance> {
        let (loc, description, input) = self.prefetch(puzzle).await?;

        let mut answers: [String; Slot::COUNT] = Default::default();
        for slot in Slot::all() {
            answers[slot.index()] = self.solve_slot(&loc, slot).await;
        }

        Ok(PuzzleInstance {
            puzzle,
            description,
            input,
            answers,
        })
    }
}
