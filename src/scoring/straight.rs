//! Small and large straights.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::ScoringStrategy;
use crate::core::{StraightRule, FACES};

/// Which straight a [`StraightScorer`] looks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StraightKind {
    /// Four in a row.
    Small,
    /// Five in a row.
    Large,
}

impl StraightKind {
    /// Length of the run this straight needs.
    #[must_use]
    pub const fn run_length(self) -> usize {
        match self {
            StraightKind::Small => 4,
            StraightKind::Large => 5,
        }
    }

    /// Classic payout.
    #[must_use]
    pub const fn default_points(self) -> u32 {
        match self {
            StraightKind::Small => 30,
            StraightKind::Large => 40,
        }
    }
}

/// Pays a fixed amount for a straight.
///
/// Only the set of distinct faces matters, so duplicates collapse:
/// `[1, 2, 3, 4, 1]` is a small straight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StraightScorer {
    kind: StraightKind,
    rule: StraightRule,
    points: u32,
    faces: FxHashSet<u8>,
}

impl StraightScorer {
    /// Create a scorer with the classic payout and a consecutive-run check.
    #[must_use]
    pub fn new(kind: StraightKind) -> Self {
        Self::with_rule(kind, StraightRule::default(), kind.default_points())
    }

    /// Create a scorer with an explicit detection rule and payout.
    #[must_use]
    pub fn with_rule(kind: StraightKind, rule: StraightRule, points: u32) -> Self {
        Self {
            kind,
            rule,
            points,
            faces: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> StraightKind {
        self.kind
    }

    fn qualifies(&self) -> bool {
        match self.rule {
            StraightRule::Consecutive => self.longest_run() >= self.kind.run_length(),
            StraightRule::DistinctCount => match self.kind {
                StraightKind::Small => self.faces.len() >= 4,
                StraightKind::Large => self.faces.len() == 5,
            },
        }
    }

    fn longest_run(&self) -> usize {
        let mut longest = 0;
        let mut run = 0;
        for face in FACES {
            if self.faces.contains(&face) {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        longest
    }
}

impl ScoringStrategy for StraightScorer {
    fn at_each(&mut self, face: u8) {
        self.faces.insert(face);
    }

    fn accumulate(&self) -> u32 {
        if self.qualifies() {
            self.points
        } else {
            0
        }
    }

    fn clear(&mut self) {
        self.faces.clear();
    }
}
