//! Scoring configuration.
//!
//! Fixed-payout categories and the straight detection rule are configured
//! here rather than hardcoded in each strategy. `ScoringConfig::default()`
//! matches the classic rule set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How straights are recognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StraightRule {
    /// A run of consecutive faces of the required length must be present.
    #[default]
    Consecutive,
    /// Only the number of distinct faces is checked (4 for small, 5 for large).
    ///
    /// Accepts some non-consecutive hands, e.g. `[1, 2, 3, 5, 5]` as a small
    /// straight. Kept for compatibility with older score sheets.
    DistinctCount,
}

/// Configuration rejected by [`ScoringConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("payout for {category} must be positive")]
    ZeroPayout { category: &'static str },
}

/// Payouts and rules for the fixed-score categories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points for a 3-and-2 full house.
    pub full_house: u32,

    /// Points for a run of four.
    pub small_straight: u32,

    /// Points for a run of five.
    pub large_straight: u32,

    /// Points for five of a kind.
    pub yahtzee: u32,

    /// Straight detection rule.
    #[serde(default)]
    pub straight_rule: StraightRule,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            full_house: 25,
            small_straight: 30,
            large_straight: 40,
            yahtzee: 50,
            straight_rule: StraightRule::Consecutive,
        }
    }
}

impl ScoringConfig {
    /// Create a new config with a custom straight rule.
    #[must_use]
    pub fn with_straight_rule(mut self, rule: StraightRule) -> Self {
        self.straight_rule = rule;
        self
    }

    /// Create a new config with a custom full house payout.
    #[must_use]
    pub fn with_full_house(mut self, points: u32) -> Self {
        self.full_house = points;
        self
    }

    /// Create a new config with custom straight payouts.
    #[must_use]
    pub fn with_straights(mut self, small: u32, large: u32) -> Self {
        self.small_straight = small;
        self.large_straight = large;
        self
    }

    /// Create a new config with a custom five-of-a-kind payout.
    #[must_use]
    pub fn with_yahtzee(mut self, points: u32) -> Self {
        self.yahtzee = points;
        self
    }

    /// Reject payouts that would make a category indistinguishable from a miss.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let payouts = [
            ("full house", self.full_house),
            ("small straight", self.small_straight),
            ("large straight", self.large_straight),
            ("yahtzee", self.yahtzee),
        ];
        match payouts.iter().find(|(_, points)| *points == 0) {
            Some((category, _)) => Err(ConfigError::ZeroPayout { category: *category }),
            None => Ok(()),
        }
    }
}
