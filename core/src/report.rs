use std::path::Path;

use aocv_webclient::PuzzleRef;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::puzzle::Slot;
use crate::scoreboard::Scoreboard;
use crate::verify::Verification;

#[derive(Debug, Clone, Serialize)]
pub struct SlotRow {
    pub puzzle: PuzzleRef,
    pub level: u8,
    pub candidate: String,
    /// `None` when verification itself failed; see `error`.
    pub verification: Option<Verification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SlotRow {
    pub fn new<E: std::fmt::Display>(
        puzzle: PuzzleRef,
        slot: Slot,
        candidate: &str,
        outcome: &Result<Verification, E>,
    ) -> Self {
        let (verification, error) = match outcome {
            Ok(v) => (Some(v.clone()), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            puzzle,
            level: slot.level(),
            candidate: candidate.to_owned(),
            verification,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub generated_at: DateTime<Local>,
    pub scoreboard: Scoreboard,
    /// Puzzles whose instance could not be built.
    pub failed_puzzles: Vec<PuzzleRef>,
    pub slots: Vec<SlotRow>,
}

impl CheckReport {
    pub fn new(generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at,
            scoreboard: Scoreboard::new(),
            failed_puzzles: Vec::new(),
            slots: Vec::new(),
        }
    }

    #[must_use]
    pub fn save(&self, path: impl AsRef<Path>) -> fsutil::Result<()> {
        fsutil::write_json_with_mkdir(path, self)
    }
}
