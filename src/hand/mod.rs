//! Five-die hands.
//!
//! A `Hand` starts with every slot unrolled (`0`). `roll_all` fills every
//! slot, `roll` re-rolls chosen positions. Randomness always comes from a
//! caller-supplied [`DiceRng`], so tests and concurrent rollers control
//! their own streams.
//!
//! ```
//! use yahtzee_scoring::core::DiceRng;
//! use yahtzee_scoring::hand::Hand;
//!
//! let mut rng = DiceRng::new(42);
//! let mut hand = Hand::new();
//! assert!(!hand.is_rolled());
//!
//! hand.roll_all(&mut rng);
//! assert!(hand.is_rolled());
//!
//! // Keep positions 0, 1, 3; re-roll the rest
//! hand.roll(&[2, 4], &mut rng).unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Index;
use thiserror::Error;

use crate::core::{is_valid_face, DiceRng, HAND_SIZE, UNROLLED};

/// Re-roll request naming a position the hand does not have.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("index {index} outside bounds of hand (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Five die values in roll order.
///
/// Order carries no scoring meaning; it only identifies positions for
/// re-rolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    dice: [u8; HAND_SIZE],
}

impl Hand {
    /// Create a hand with every slot unrolled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dice: [UNROLLED; HAND_SIZE],
        }
    }

    /// Read access to the die values.
    #[must_use]
    pub fn values(&self) -> &[u8; HAND_SIZE] {
        &self.dice
    }

    /// True once every slot shows a face in 1..=6.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.dice.iter().all(|&d| is_valid_face(d))
    }

    /// Roll every die.
    pub fn roll_all(&mut self, rng: &mut DiceRng) {
        for die in &mut self.dice {
            *die = rng.roll_die();
        }
        log::trace!("rolled all dice: {}", self);
    }

    /// Re-roll the dice at `indices`.
    ///
    /// Stops at the first index outside `0..5`; dice re-rolled before it
    /// keep their new values.
    pub fn roll(&mut self, indices: &[usize], rng: &mut DiceRng) -> Result<(), HandError> {
        for &index in indices {
            self.roll_one(index, rng)?;
        }
        log::trace!("re-rolled {:?}: {}", indices, self);
        Ok(())
    }

    fn roll_one(&mut self, index: usize, rng: &mut DiceRng) -> Result<(), HandError> {
        let die = self.dice.get_mut(index).ok_or(HandError::IndexOutOfBounds {
            index,
            len: HAND_SIZE,
        })?;
        *die = rng.roll_die();
        Ok(())
    }
}

impl From<[u8; HAND_SIZE]> for Hand {
    fn from(dice: [u8; HAND_SIZE]) -> Self {
        Self { dice }
    }
}

impl AsRef<[u8]> for Hand {
    fn as_ref(&self) -> &[u8] {
        &self.dice
    }
}

impl Index<usize> for Hand {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.dice[index]
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, die) in self.dice.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", die)?;
        }
        Ok(())
    }
}
