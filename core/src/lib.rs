pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}

pub mod action;
pub mod config;
pub mod pipeline;
pub mod puzzle;
pub mod report;
pub mod scoreboard;
pub mod solution;
pub mod storage;
pub mod str_interp;
pub mod style;
pub mod verify;

pub use crate::config::Config;
pub use crate::puzzle::{PuzzleInstance, Slot};
pub use crate::scoreboard::Scoreboard;
pub use crate::verify::Verification;
