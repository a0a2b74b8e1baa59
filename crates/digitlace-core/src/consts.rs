//! Process-wide board dimensions.
//!
//! These constants define the digit universe shared by [`DigitSet`] and its
//! board-level consumers. They are fixed at compile time and never mutated.
//!
//! [`DigitSet`]: crate::DigitSet

use std::ops::RangeInclusive;

/// Number of digits in the universe, which is also the number of cells in a
/// row, column, or box.
pub const LENGTH: u8 = 9;

/// Side length of a box (the integer square root of [`LENGTH`]).
///
/// Unused by [`DigitSet`](crate::DigitSet) itself; board-level consumers use
/// it to derive box coordinates.
pub const BOX_LENGTH: u8 = 3;

/// The inclusive range of valid digit values.
pub const VALID_RANGE: RangeInclusive<u8> = 1..=LENGTH;

/// The sentinel value meaning "no digit / unknown cell".
///
/// Never a set member; insertion and removal of this value are universal
/// no-ops (see [`DigitSet::insert`](crate::DigitSet::insert)).
pub const NO_DIGIT: u8 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_consistent() {
        assert_eq!(BOX_LENGTH * BOX_LENGTH, LENGTH);
        assert_eq!(VALID_RANGE.count(), usize::from(LENGTH));
        assert!(!VALID_RANGE.contains(&NO_DIGIT));
    }
}
