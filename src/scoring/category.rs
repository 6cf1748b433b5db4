//! The classic thirteen categories.

use serde::{Deserialize, Serialize};

use super::{
    score, ChanceScorer, FullHouseScorer, NOfAKindScorer, ScoreError, ScoringStrategy,
    SingleDieScorer, StraightKind, StraightScorer, YahtzeeScorer,
};
use crate::core::ScoringConfig;

/// Scoring category on a classic score sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    // Upper section
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    // Lower section
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Face counted by an upper-section category.
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_upper(self) -> bool {
        self.face().is_some()
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "3 of a Kind",
            Category::FourOfAKind => "4 of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Sm. Straight",
            Category::LargeStraight => "Lg. Straight",
            Category::Yahtzee => "Yahtzee",
            Category::Chance => "Chance",
        }
    }

    /// Build this category's strategy under the classic rules.
    #[must_use]
    pub fn strategy(self) -> Box<dyn ScoringStrategy> {
        self.strategy_with(&ScoringConfig::default())
    }

    /// Build this category's strategy with custom payouts and straight rule.
    #[must_use]
    pub fn strategy_with(self, config: &ScoringConfig) -> Box<dyn ScoringStrategy> {
        match self {
            Category::Ones => Box::new(SingleDieScorer::new(1)),
            Category::Twos => Box::new(SingleDieScorer::new(2)),
            Category::Threes => Box::new(SingleDieScorer::new(3)),
            Category::Fours => Box::new(SingleDieScorer::new(4)),
            Category::Fives => Box::new(SingleDieScorer::new(5)),
            Category::Sixes => Box::new(SingleDieScorer::new(6)),
            Category::ThreeOfAKind => Box::new(NOfAKindScorer::new(3)),
            Category::FourOfAKind => Box::new(NOfAKindScorer::new(4)),
            Category::FullHouse => Box::new(FullHouseScorer::with_points(config.full_house)),
            Category::SmallStraight => Box::new(StraightScorer::with_rule(
                StraightKind::Small,
                config.straight_rule,
                config.small_straight,
            )),
            Category::LargeStraight => Box::new(StraightScorer::with_rule(
                StraightKind::Large,
                config.straight_rule,
                config.large_straight,
            )),
            Category::Yahtzee => Box::new(YahtzeeScorer::with_points(config.yahtzee)),
            Category::Chance => Box::new(ChanceScorer::new()),
        }
    }

    /// Score `dice` in this category under the classic rules.
    pub fn score<D: AsRef<[u8]> + ?Sized>(self, dice: &D) -> Result<u32, ScoreError> {
        score(dice, &mut self.strategy())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Score one hand in every category, in [`Category::ALL`] order.
pub fn score_all<D: AsRef<[u8]> + ?Sized>(
    dice: &D,
    config: &ScoringConfig,
) -> Result<Vec<(Category, u32)>, ScoreError> {
    Category::ALL
        .iter()
        .map(|&category| {
            let mut strategy = category.strategy_with(config);
            score(dice, &mut strategy).map(|points| (category, points))
        })
        .collect()
}
