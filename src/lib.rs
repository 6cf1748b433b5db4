//! # yahtzee-scoring
//!
//! Rolling and scoring five-die hands under the classic dice game rules.
//!
//! ## Design Principles
//!
//! 1. **Pluggable Categories**: Every category is a `ScoringStrategy`.
//!    The engine drives any strategy without knowing which one it is.
//!
//! 2. **Order Independence**: A hand is a multiset. Every strategy gives the
//!    same score for every permutation of the same five dice.
//!
//! 3. **Injected Randomness**: Rolls draw from a caller-owned `DiceRng`,
//!    never from hidden global state.
//!
//! ## Example
//!
//! ```
//! use yahtzee_scoring::{score, Category, DiceRng, Hand, StraightKind, StraightScorer};
//!
//! let mut rng = DiceRng::new(42);
//! let mut hand = Hand::new();
//! hand.roll_all(&mut rng);
//! hand.roll(&[0, 3], &mut rng).unwrap();
//!
//! let chance = Category::Chance.score(&hand).unwrap();
//! assert!((5..=30).contains(&chance));
//!
//! let mut small = StraightScorer::new(StraightKind::Small);
//! assert_eq!(score(&[1u8, 2, 3, 4, 1], &mut small), Ok(30));
//! ```
//!
//! ## Modules
//!
//! - `core`: Die faces, the dice RNG, scoring configuration
//! - `hand`: Five-die hands and (re-)rolls
//! - `scoring`: The scoring engine, the six strategies, categories

pub mod core;
pub mod hand;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState,
    ScoringConfig, StraightRule, ConfigError,
    HAND_SIZE,
};

pub use crate::hand::{Hand, HandError};

pub use crate::scoring::{
    score, score_all, Category, ScoreError, ScoringStrategy,
    SingleDieScorer, NOfAKindScorer, StraightKind, StraightScorer,
    FullHouseScorer, ChanceScorer, YahtzeeScorer,
};
