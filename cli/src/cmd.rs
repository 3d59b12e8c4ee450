pub mod check;
pub mod fetch;
pub mod init;
pub mod run;

use anyhow::ensure;
use aocv_core::config::{Config, RunConfig};
use aocv_webclient::PuzzleRef;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Init(init::Args),
    Fetch(fetch::Args),

    #[command(alias("r"))]
    Run(run::Args),

    #[command(alias("c"))]
    Check(check::Args),
}

/// `Ok` carries the process exit status.
pub type SubcmdResult = anyhow::Result<i32>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Init(args) => init::exec(args, self),
            Fetch(args) => fetch::exec(args, self).await,
            Run(args) => run::exec(args, self).await,
            Check(args) => check::exec(args, self).await,
        }
    }
}

/// Which puzzles to work on. Falls back to `[run]` in aocv.toml.
#[derive(Debug, Clone, clap::Args)]
pub struct PuzzleArgs {
    /// Event year (repeatable)
    #[arg(short, long)]
    pub year: Vec<u32>,

    /// Day of the event, 1-25 (repeatable)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=25))]
    pub day: Vec<u32>,
}

impl PuzzleArgs {
    pub fn select(&self, cfg: &Config) -> anyhow::Result<Vec<PuzzleRef>> {
        let pick = |arg: &Vec<u32>, default: &Vec<u32>| {
            if arg.is_empty() {
                default.clone()
            } else {
                arg.clone()
            }
        };
        let run = RunConfig {
            years: pick(&self.year, &cfg.run.years),
            days: pick(&self.day, &cfg.run.days),
            ..cfg.run.clone()
        };
        let puzzles = run.puzzles();
        ensure!(
            !puzzles.is_empty(),
            "No puzzle selected: pass --year or set `run.years` in {}",
            Config::FILENAME
        );
        Ok(puzzles)
    }
}
