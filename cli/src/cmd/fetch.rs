use aocv_core::{action, config::Config};

use super::{GlobalArgs, PuzzleArgs, SubcmdResult};
use crate::{config::EnvConfig, util};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub puzzles: PuzzleArgs,
}

pub async fn exec(args: &Args, _: &GlobalArgs) -> SubcmdResult {
    let cfg = Config::from_file_finding_in_ancestors(util::current_dir())?;
    let puzzles = args.puzzles.select(&cfg)?;
    let cli = EnvConfig::from_env()?.make_client()?;

    action::fetch_all(&cli, &cfg, &puzzles).await?;
    Ok(0)
}
