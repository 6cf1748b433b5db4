//! Scoring engine.
//!
//! Every scoring category is a [`ScoringStrategy`]: a small stateful
//! accumulator that is fed one die at a time and then asked for a total.
//! [`score`] validates a hand, drives a strategy over it and always leaves
//! the strategy cleared, so one instance can be reused hand after hand.
//!
//! ## Example Usage
//!
//! ```
//! use yahtzee_scoring::hand::Hand;
//! use yahtzee_scoring::scoring::{score, FullHouseScorer, NOfAKindScorer};
//!
//! let hand = Hand::from([1, 1, 2, 2, 2]);
//!
//! let mut full_house = FullHouseScorer::new();
//! assert_eq!(score(&hand, &mut full_house), Ok(25));
//!
//! // Sum of the whole hand when some face appears at least three times
//! let mut three_of_a_kind = NOfAKindScorer::new(3);
//! assert_eq!(score(&hand, &mut three_of_a_kind), Ok(8));
//! ```
//!
//! ## Strategies
//!
//! - [`SingleDieScorer`]: sum of dice showing one face (upper section)
//! - [`NOfAKindScorer`]: whole-hand sum when a face repeats `n` times
//! - [`StraightScorer`]: fixed payout for a small or large straight
//! - [`FullHouseScorer`]: fixed payout for a 3-and-2 split
//! - [`ChanceScorer`]: whole-hand sum, unconditionally
//! - [`YahtzeeScorer`]: fixed payout when all five dice match
//!
//! [`Category`] names the classic thirteen categories and builds the
//! matching strategy.

mod single;
mod kind;
mod straight;
mod full_house;
mod chance;
mod yahtzee;
mod category;

pub use single::SingleDieScorer;
pub use kind::NOfAKindScorer;
pub use straight::{StraightKind, StraightScorer};
pub use full_house::FullHouseScorer;
pub use chance::ChanceScorer;
pub use yahtzee::YahtzeeScorer;
pub use category::{score_all, Category};

use thiserror::Error;

use crate::core::{is_valid_face, HAND_SIZE};

/// Hand rejected before any die reached the strategy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The hand does not hold exactly five dice.
    #[error("hand must have length 5, got {len}")]
    InvalidHand { len: usize },

    /// A die shows something other than 1..=6.
    #[error("die at index {index} has invalid value {value}")]
    InvalidDie { index: usize, value: u8 },
}

/// Accumulation protocol shared by every scoring category.
///
/// ## Implementation Notes
///
/// - `at_each`: Called once per die, in hand order. Must not depend on order.
/// - `accumulate`: Must not mutate; calling it twice gives the same total.
/// - `clear`: Afterwards the strategy must equal a freshly constructed one.
pub trait ScoringStrategy {
    /// Ingest one die value.
    fn at_each(&mut self, face: u8);

    /// Total for the dice ingested since the last clear.
    fn accumulate(&self) -> u32;

    /// Reset to the construction-time state.
    fn clear(&mut self);
}

impl<S: ScoringStrategy + ?Sized> ScoringStrategy for Box<S> {
    fn at_each(&mut self, face: u8) {
        (**self).at_each(face);
    }

    fn accumulate(&self) -> u32 {
        (**self).accumulate()
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// Clears the borrowed strategy when dropped, on every exit path.
struct ClearOnDrop<'a, S: ScoringStrategy + ?Sized>(&'a mut S);

impl<S: ScoringStrategy + ?Sized> Drop for ClearOnDrop<'_, S> {
    fn drop(&mut self) {
        self.0.clear();
    }
}

/// Score `dice` with `strategy`.
///
/// The whole hand is validated before the first `at_each`, so a rejected
/// hand never partially feeds the strategy. Whether scoring succeeds or
/// fails, the strategy is cleared before returning.
pub fn score<D, S>(dice: &D, strategy: &mut S) -> Result<u32, ScoreError>
where
    D: AsRef<[u8]> + ?Sized,
    S: ScoringStrategy + ?Sized,
{
    let guard = ClearOnDrop(strategy);
    let dice = dice.as_ref();

    validate(dice).map_err(|err| {
        log::debug!("rejected hand {:?}: {}", dice, err);
        err
    })?;

    for &face in dice {
        guard.0.at_each(face);
    }
    let total = guard.0.accumulate();
    log::trace!("scored {:?} -> {}", dice, total);
    Ok(total)
}

fn validate(dice: &[u8]) -> Result<(), ScoreError> {
    if dice.len() != HAND_SIZE {
        return Err(ScoreError::InvalidHand { len: dice.len() });
    }
    match dice.iter().position(|&d| !is_valid_face(d)) {
        Some(index) => Err(ScoreError::InvalidDie {
            index,
            value: dice[index],
        }),
        None => Ok(()),
    }
}
