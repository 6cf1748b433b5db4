//! Scoring engine integration tests.
//!
//! These tests drive every strategy through the public `score` entry point
//! and check the hand rolling path end to end.

use yahtzee_scoring::core::DiceRng;
use yahtzee_scoring::hand::{Hand, HandError};
use yahtzee_scoring::scoring::{
    score, ChanceScorer, FullHouseScorer, NOfAKindScorer, ScoreError, ScoringStrategy,
    SingleDieScorer, StraightKind, StraightScorer, YahtzeeScorer,
};
use yahtzee_scoring::{Category, ScoringConfig};

// =============================================================================
// Validation Tests
// =============================================================================

/// Test that every malformed hand is rejected with the right error.
#[test]
fn test_bad_hands() {
    let cases: [(&str, &[u8], Result<u32, ScoreError>); 6] = [
        ("too many in hand", &[1, 2, 3, 4, 5, 6], Err(ScoreError::InvalidHand { len: 6 })),
        ("too few in hand", &[1, 2, 3], Err(ScoreError::InvalidHand { len: 3 })),
        ("empty hand", &[], Err(ScoreError::InvalidHand { len: 0 })),
        ("die too high", &[1, 2, 3, 4, 10], Err(ScoreError::InvalidDie { index: 4, value: 10 })),
        ("unrolled die", &[1, 0, 3, 4, 5], Err(ScoreError::InvalidDie { index: 1, value: 0 })),
        ("valid", &[1, 2, 3, 4, 5], Ok(0)),
    ];

    let mut strategy = YahtzeeScorer::new();
    for (desc, dice, expected) in cases {
        assert_eq!(score(dice, &mut strategy), expected, "{}", desc);
    }
}

/// Test that scoring an unrolled hand is an invalid-die error.
#[test]
fn test_unrolled_hand_is_invalid_die() {
    let hand = Hand::new();
    assert_eq!(
        score(&hand, &mut ChanceScorer::new()),
        Err(ScoreError::InvalidDie { index: 0, value: 0 })
    );
}

/// Test that a failed call leaves no state behind for the next hand.
#[test]
fn test_failure_then_success_reuses_strategy() {
    let mut chance = ChanceScorer::new();
    assert!(score(&[6u8, 6, 6, 6, 7], &mut chance).is_err());
    assert_eq!(chance.accumulate(), 0);
    assert_eq!(score(&[1u8, 1, 1, 1, 1], &mut chance), Ok(5));
}

// =============================================================================
// Category Scenario Tests
// =============================================================================

#[test]
fn test_single_value_fours() {
    assert_eq!(score(&[4u8, 4, 1, 4, 2], &mut SingleDieScorer::new(4)), Ok(12));
}

#[test]
fn test_n_of_a_kind_pays_whole_hand() {
    assert_eq!(score(&[5u8, 5, 5, 5, 4], &mut NOfAKindScorer::new(3)), Ok(24));
    assert_eq!(score(&[1u8, 1, 1, 3, 4], &mut NOfAKindScorer::new(4)), Ok(0));
}

#[test]
fn test_small_straight_with_duplicate() {
    let mut small = StraightScorer::new(StraightKind::Small);
    assert_eq!(score(&[1u8, 2, 3, 4, 1], &mut small), Ok(30));
}

#[test]
fn test_full_house_splits() {
    let mut full_house = FullHouseScorer::new();
    assert_eq!(score(&[1u8, 1, 2, 2, 2], &mut full_house), Ok(25));
    assert_eq!(score(&[1u8, 1, 1, 1, 2], &mut full_house), Ok(0));
}

#[test]
fn test_top_category() {
    let mut yahtzee = YahtzeeScorer::new();
    assert_eq!(score(&[6u8, 6, 6, 6, 6], &mut yahtzee), Ok(50));
    assert_eq!(score(&[6u8, 6, 6, 6, 5], &mut yahtzee), Ok(0));
}

#[test]
fn test_chance_sum() {
    assert_eq!(score(&[2u8, 2, 4, 4, 5], &mut ChanceScorer::new()), Ok(17));
}

/// Five of a kind qualifies for several lower categories at once.
#[test]
fn test_five_of_a_kind_across_categories() {
    let hand = Hand::from([3, 3, 3, 3, 3]);
    assert_eq!(Category::Threes.score(&hand), Ok(15));
    assert_eq!(Category::ThreeOfAKind.score(&hand), Ok(15));
    assert_eq!(Category::FourOfAKind.score(&hand), Ok(15));
    assert_eq!(Category::FullHouse.score(&hand), Ok(0));
    assert_eq!(Category::Yahtzee.score(&hand), Ok(50));
}

// =============================================================================
// Rolling + Scoring Tests
// =============================================================================

/// Test a full roll, keep, re-roll, score cycle with a seeded RNG.
#[test]
fn test_roll_then_score_every_category() {
    let mut rng = DiceRng::new(2024);
    let config = ScoringConfig::default();

    for _ in 0..50 {
        let mut hand = Hand::new();
        hand.roll_all(&mut rng);
        hand.roll(&[0, 2, 4], &mut rng).unwrap();
        assert!(hand.is_rolled());

        let scores = yahtzee_scoring::score_all(&hand, &config).unwrap();
        let sum: u32 = hand.values().iter().map(|&d| u32::from(d)).sum();

        let upper: u32 = scores
            .iter()
            .filter(|(category, _)| category.is_upper())
            .map(|(_, points)| points)
            .sum();
        assert_eq!(upper, sum, "upper section should partition hand {}", hand);

        let chance = scores.iter().find(|(c, _)| *c == Category::Chance).unwrap().1;
        assert_eq!(chance, sum);
    }
}

/// Test that re-rolling a bad position reports it and keeps earlier rolls.
#[test]
fn test_reroll_out_of_bounds() {
    let mut rng = DiceRng::new(1);
    let mut hand = Hand::from([1, 1, 1, 1, 1]);

    let result = hand.roll(&[9], &mut rng);
    assert_eq!(result, Err(HandError::IndexOutOfBounds { index: 9, len: 5 }));
    assert_eq!(hand, Hand::from([1, 1, 1, 1, 1]));
}

/// Forked RNGs let independent rollers reproduce each other's hands.
#[test]
fn test_forked_rollers_are_reproducible() {
    let roll_with = |seed| {
        let mut root = DiceRng::new(seed);
        let mut hands = Vec::new();
        for _ in 0..4 {
            let mut rng = root.fork();
            let mut hand = Hand::new();
            hand.roll_all(&mut rng);
            hands.push(hand);
        }
        hands
    };

    assert_eq!(roll_with(77), roll_with(77));
}
