use aocv_webclient::PuzzleRef;
use serde::Serialize;

/// Index of one of the two answers a puzzle asks for.
///
/// ```
/// use aocv_core::puzzle::Slot;
///
/// let slot = Slot::new(1);
/// assert_eq!(slot.index(), 1);
/// assert_eq!(slot.level(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Slot(usize);

impl Slot {
    pub const COUNT: usize = 2;

    /// # Panics
    /// Panics if `index >= Slot::COUNT`.
    pub fn new(index: usize) -> Self {
        assert!(
            index < Self::COUNT,
            "slot index out of range: {} (must be < {})",
            index,
            Self::COUNT
        );
        Self(index)
    }

    pub fn all() -> [Slot; Self::COUNT] {
        [Slot(0), Slot(1)]
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based level number sent to the judge.
    pub fn level(self) -> u8 {
        self.0 as u8 + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInstance {
    pub puzzle: PuzzleRef,
    pub description: String,
    pub input: String,
    /// Local candidates; an empty string means none was produced.
    pub answers: [String; Slot::COUNT],
}

impl PuzzleInstance {
    pub fn answer(&self, slot: Slot) -> &str {
        &self.answers[slot.index()]
    }

    pub fn has_answer(&self, slot: Slot) -> bool {
        !self.answer(slot).is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slots_are_levels_one_and_two() {
        let levels: Vec<u8> = Slot::all().iter().map(|s| s.level()).collect();
        assert_eq!(levels, [1, 2]);
    }

    #[test]
    #[should_panic(expected = "slot index out of range")]
    fn out_of_range_slot_panics() {
        Slot::new(2);
    }

    #[test]
    fn empty_answer_means_no_candidate() {
        let inst = PuzzleInstance {
            puzzle: PuzzleRef::new(2022, 1),
            description: String::new(),
            input: String::new(),
            answers: ["42".to_owned(), String::new()],
        };
        assert!(inst.has_answer(Slot::new(0)));
        assert!(!inst.has_answer(Slot::new(1)));
        assert_eq!(inst.answer(Slot::new(0)), "42");
    }
}
