use std::path::{Path, PathBuf};
use std::time::Duration;

use aocv_webclient::{Client, PuzzleRef};
use chrono::{DateTime, Local};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::error::*;
use crate::pipeline::Pipeline;
use crate::puzzle::{PuzzleInstance, Slot};
use crate::report::{CheckReport, SlotRow};
use crate::solution::SolutionRunner;
use crate::storage::ProblemsHome;
use crate::style;
use crate::verify::verify;

/// Write the bundled example `aocv.toml` into `dir`. Returns the written path.
pub fn init_repository(dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if let Ok(config_filepath) = Config::find_file_in_ancestors(dir) {
        bail!(
            "Already an aocv repository.\nIf it's intentional, remove {:?} and then try again.",
            config_filepath
        );
    }

    let config_filepath = dir.join(Config::FILENAME);
    let toml = Config::example_toml()?;
    fsutil::write_with_mkdir(&config_filepath, toml).context("Failed to init aocv repository")?;
    Ok(config_filepath)
}

pub fn make_runner(cfg: &Config) -> SolutionRunner {
    SolutionRunner::new(cfg.build.command.clone()).execution_time_limit(cfg.run.time_limit())
}

fn spinner(msg: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(msg);
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Cache description and input of every puzzle. Fails if any puzzle could not be fetched.
pub async fn fetch_all(cli: &dyn Client, cfg: &Config, puzzles: &[PuzzleRef]) -> Result<()> {
    let problems_home = cfg.problems_home();
    let runner = self::make_runner(cfg);
    let pipeline = Pipeline::new(
        cli,
        ProblemsHome::new(&problems_home),
        &runner,
        &cfg.build.source_ext,
    );

    let mut num_failed = 0;
    for &puzzle in puzzles {
        let bar = self::spinner(format!("Fetching {} ...", puzzle));
        let res = pipeline.prefetch(puzzle).await;
        bar.finish_and_clear();

        match res {
            Ok((loc, _, _)) => println!(
                "{}",
                format!("Saved {} in '{}'", puzzle, loc.dir().display()).green()
            ),
            Err(e) => {
                num_failed += 1;
                println!("{}", format!("{:#}", e).bright_red());
            }
        }
    }

    ensure!(
        num_failed == 0,
        "{}/{} puzzle(s) could not be fetched",
        num_failed,
        puzzles.len()
    );
    Ok(())
}

/// Build every puzzle instance and print the local candidates; nothing is submitted.
pub async fn build_all(
    cli: &dyn Client,
    cfg: &Config,
    puzzles: &[PuzzleRef],
) -> Result<Vec<PuzzleInstance>> {
    let problems_home = cfg.problems_home();
    let runner = self::make_runner(cfg);
    let pipeline = Pipeline::new(
        cli,
        ProblemsHome::new(&problems_home),
        &runner,
        &cfg.build.source_ext,
    );

    let mut instances = Vec::with_capacity(puzzles.len());
    for (i, &puzzle) in puzzles.iter().enumerate() {
        let bar = self::spinner(format!("Building {} ...", puzzle));
        let res = pipeline.build(puzzle).await;
        bar.finish_and_clear();

        match res {
            Ok(instance) => {
                style::print_candidates(&instance);
                instances.push(instance);
            }
            Err(e) => style::print_puzzle_failure(i + 1, puzzle, &e),
        }
    }
    Ok(instances)
}

/// Build, submit and tally every slot of every puzzle, in order.
pub async fn check_all(
    cli: &dyn Client,
    cfg: &Config,
    puzzles: &[PuzzleRef],
    now: DateTime<Local>,
) -> Result<CheckReport> {
    let problems_home = cfg.problems_home();
    let runner = self::make_runner(cfg);
    let pipeline = Pipeline::new(
        cli,
        ProblemsHome::new(&problems_home),
        &runner,
        &cfg.build.source_ext,
    );

    let mut report = CheckReport::new(now);
    let mut seq = 0;

    for &puzzle in puzzles {
        let bar = self::spinner(format!("Building {} ...", puzzle));
        let res = pipeline.build(puzzle).await;
        bar.finish_and_clear();

        let instance = match res {
            Ok(instance) => instance,
            Err(e) => {
                seq += 1;
                style::print_puzzle_failure(seq, puzzle, &e);
                report.failed_puzzles.push(puzzle);
                continue;
            }
        };

        for slot in Slot::all() {
            seq += 1;
            let candidate = instance.answer(slot);
            let outcome = verify(cli, &instance, slot).await;

            style::print_slot_report(seq, puzzle, slot, candidate, &outcome);
            if let Err(e) = &outcome {
                log::warn!("Failed to verify {} level {}: {}", puzzle, slot.level(), e);
            }

            report.scoreboard.record(slot, &outcome);
            report
                .slots
                .push(SlotRow::new(puzzle, slot, candidate, &outcome));
        }
    }

    style::print_summary(&report.scoreboard);
    Ok(report)
}
