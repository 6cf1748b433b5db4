//! Full house: three of one face and two of another.

use rustc_hash::FxHashMap;

use super::ScoringStrategy;

/// Pays a fixed amount for a 3-and-2 split across two faces.
///
/// Two distinct faces split 4-and-1 do not qualify, and neither do five
/// of a kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullHouseScorer {
    points: u32,
    counts: FxHashMap<u8, u8>,
}

impl Default for FullHouseScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FullHouseScorer {
    /// Create a scorer paying the classic 25.
    #[must_use]
    pub fn new() -> Self {
        Self::with_points(25)
    }

    /// Create a scorer with a custom payout.
    #[must_use]
    pub fn with_points(points: u32) -> Self {
        Self {
            points,
            counts: FxHashMap::default(),
        }
    }
}

impl ScoringStrategy for FullHouseScorer {
    fn at_each(&mut self, face: u8) {
        *self.counts.entry(face).or_insert(0) += 1;
    }

    fn accumulate(&self) -> u32 {
        if self.counts.len() != 2 {
            return 0;
        }
        if self.counts.values().any(|&count| count == 1 || count == 4) {
            return 0;
        }
        self.points
    }

    fn clear(&mut self) {
        self.counts.clear();
    }
}
