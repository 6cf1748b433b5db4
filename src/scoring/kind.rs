//! N-of-a-kind: whole-hand sum when some face repeats often enough.

use rustc_hash::FxHashMap;

use super::ScoringStrategy;
use crate::core::HAND_SIZE;

/// Pays the sum of all dice once any face appears at least `n` times.
///
/// The payout is the whole hand, not just the matching dice:
/// `[5, 5, 5, 5, 4]` scores 24 as three of a kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NOfAKindScorer {
    n: u8,
    counts: FxHashMap<u8, u8>,
    sum: u32,
}

impl NOfAKindScorer {
    /// Create a scorer requiring `n` matching dice.
    ///
    /// # Panics
    /// Panics if `n` is 0 or larger than the hand.
    #[must_use]
    pub fn new(n: u8) -> Self {
        assert!(
            n >= 1 && usize::from(n) <= HAND_SIZE,
            "n-of-a-kind count out of range: {}",
            n
        );
        Self {
            n,
            counts: FxHashMap::default(),
            sum: 0,
        }
    }

    /// Required number of matching dice.
    #[must_use]
    pub fn n(&self) -> u8 {
        self.n
    }
}

impl ScoringStrategy for NOfAKindScorer {
    fn at_each(&mut self, face: u8) {
        *self.counts.entry(face).or_insert(0) += 1;
        self.sum += u32::from(face);
    }

    fn accumulate(&self) -> u32 {
        if self.counts.values().any(|&count| count >= self.n) {
            self.sum
        } else {
            0
        }
    }

    fn clear(&mut self) {
        self.counts.clear();
        self.sum = 0;
    }
}
