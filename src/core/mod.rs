//! Core types: die faces, the dice RNG, scoring configuration.
//!
//! Everything here is independent of any particular scoring category.

pub mod die;
pub mod rng;
pub mod config;

pub use die::{is_valid_face, FACES, HAND_SIZE, MAX_FACE, MIN_FACE, UNROLLED};
pub use rng::{DiceRng, DiceRngState};
pub use config::{ConfigError, ScoringConfig, StraightRule};
