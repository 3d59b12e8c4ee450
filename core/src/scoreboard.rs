use serde::Serialize;

use crate::puzzle::Slot;
use crate::verify::Verification;

/// Running tally over every judged slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub correct_per_level: [usize; Slot::COUNT],
    /// Unknown, rate limited or failed to verify.
    pub unchecked: usize,
    pub total_slots: usize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<E>(&mut self, slot: Slot, outcome: &Result<Verification, E>) {
        self.total_slots += 1;
        match outcome {
            Ok(Verification::Correct(_)) => self.correct_per_level[slot.index()] += 1,
            Ok(Verification::Wrong(_)) => (),
            Ok(Verification::RateLimited | Verification::Unknown) | Err(_) => self.unchecked += 1,
        }
    }

    pub fn correct(&self) -> usize {
        self.correct_per_level.iter().sum()
    }

    pub fn wrong(&self) -> usize {
        self.total_slots - self.correct() - self.unchecked
    }

    /// A puzzle counts as solved once its last level is correct.
    pub fn solved(&self) -> usize {
        self.correct_per_level[Slot::COUNT - 1]
    }

    /// Slots not known to be correct.
    pub fn unsolved(&self) -> usize {
        self.total_slots - self.correct()
    }
}
