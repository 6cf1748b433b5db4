//! Upper-section scoring: the sum of dice showing one face.

use super::ScoringStrategy;
use crate::core::is_valid_face;

/// Sums the dice that show `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleDieScorer {
    target: u8,
    sum: u32,
}

impl SingleDieScorer {
    /// Create a scorer for one face.
    ///
    /// # Panics
    /// Panics if `target` is not in 1..=6.
    #[must_use]
    pub fn new(target: u8) -> Self {
        assert!(is_valid_face(target), "target face out of range: {}", target);
        Self { target, sum: 0 }
    }

    /// The face this scorer counts.
    #[must_use]
    pub fn target(&self) -> u8 {
        self.target
    }
}

impl ScoringStrategy for SingleDieScorer {
    fn at_each(&mut self, face: u8) {
        if face == self.target {
            self.sum += u32::from(self.target);
        }
    }

    fn accumulate(&self) -> u32 {
        self.sum
    }

    fn clear(&mut self) {
        self.sum = 0;
    }
}
