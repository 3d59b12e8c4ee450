use std::path::PathBuf;

use anyhow::Context as _;
use aocv_core::{action, config::Config};

use super::{GlobalArgs, PuzzleArgs, SubcmdResult};
use crate::{config::EnvConfig, util};

/// Submit every local answer and report the verdicts.
/// Exits with the number of wrong answers.
#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub puzzles: PuzzleArgs,

    /// Also write the results as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub async fn exec(args: &Args, _: &GlobalArgs) -> SubcmdResult {
    let cfg = Config::from_file_finding_in_ancestors(util::current_dir())?;
    let puzzles = args.puzzles.select(&cfg)?;
    let cli = EnvConfig::from_env()?.make_client()?;

    let report = action::check_all(&cli, &cfg, &puzzles, chrono::Local::now()).await?;

    if let Some(path) = &args.report {
        report.save(path).context("Failed to save report")?;
        println!(
            "Report saved in '{}'",
            util::replace_homedir_to_tilde(path).to_string_lossy()
        );
    }

    Ok(exit_code(report.scoreboard.wrong()))
}

/// Exit statuses are 8 bits wide; anything above 255 would wrap.
fn exit_code(wrong: usize) -> i32 {
    wrong.min(255) as i32
}

#[cfg(test)]
mod test {
    use super::exit_code;

    #[test]
    fn exit_code_saturates() {
        assert_eq!(exit_code(0), 0);
        assert_eq!(exit_code(3), 3);
        assert_eq!(exit_code(255), 255);
        assert_eq!(exit_code(256), 255);
        assert_eq!(exit_code(usize::MAX), 255);
    }
}
