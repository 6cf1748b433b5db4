//! Die faces and hand size.

/// Number of dice in a hand.
pub const HAND_SIZE: usize = 5;

/// Lowest face of a six-sided die.
pub const MIN_FACE: u8 = 1;

/// Highest face of a six-sided die.
pub const MAX_FACE: u8 = 6;

/// Placeholder for a slot that has not been rolled yet.
pub const UNROLLED: u8 = 0;

/// Every face, low to high.
pub const FACES: [u8; 6] = [1, 2, 3, 4, 5, 6];

/// Check whether `value` is a face a die can show.
#[inline]
#[must_use]
pub const fn is_valid_face(value: u8) -> bool {
    value >= MIN_FACE && value <= MAX_FACE
}
