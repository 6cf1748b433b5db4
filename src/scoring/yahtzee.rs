//! Top category: all five dice equal.

use super::ScoringStrategy;

/// Pays a fixed amount when every die shows the same face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YahtzeeScorer {
    points: u32,
    last: Option<u8>,
    uniform: bool,
}

impl Default for YahtzeeScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl YahtzeeScorer {
    /// Create a scorer paying the classic 50.
    #[must_use]
    pub fn new() -> Self {
        Self::with_points(50)
    }

    /// Create a scorer with a custom payout.
    #[must_use]
    pub fn with_points(points: u32) -> Self {
        Self {
            points,
            last: None,
            uniform: true,
        }
    }
}

impl ScoringStrategy for YahtzeeScorer {
    fn at_each(&mut self, face: u8) {
        if self.last.is_some_and(|last| last != face) {
            self.uniform = false;
        }
        self.last = Some(face);
    }

    fn accumulate(&self) -> u32 {
        if self.uniform {
            self.points
        } else {
            0
        }
    }

    fn clear(&mut self) {
        self.last = None;
        self.uniform = true;
    }
}
