//! Chance: the plain sum of the hand.

use super::ScoringStrategy;

/// Sums every die.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChanceScorer {
    sum: u32,
}

impl ChanceScorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoringStrategy for ChanceScorer {
    fn at_each(&mut self, face: u8) {
        self.sum += u32::from(face);
    }

    fn accumulate(&self) -> u32 {
        self.sum
    }

    fn clear(&mut self) {
        self.sum = 0;
    }
}
