//! Error kinds shared with board-level consumers.
//!
//! [`DigitSet`] operations report ordinary boundary conditions (out-of-range
//! values, redundant insertions or removals) through boolean return values
//! and never produce an [`Error`]. The puzzle and board kinds defined here
//! are raised by the parsing and validation layers built on top of this
//! crate; [`Error::NotImplemented`] is the one kind produced inside it, by
//! [`DigitSet::symmetric_difference`].
//!
//! [`DigitSet`]: crate::DigitSet
//! [`DigitSet::symmetric_difference`]: crate::DigitSet::symmetric_difference

use derive_more::{Display, Error};

/// Errors reported at the digit-set and board level.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// A puzzle string has the wrong length or contains a disallowed
    /// character.
    #[display("malformed puzzle string: {detail}")]
    MalformedPuzzle {
        /// Description of what was wrong with the string.
        detail: String,
    },

    /// A board places the same digit more than once in a row, column, or
    /// box.
    #[display("invalid board: digit {digit} appears more than once in a {unit}")]
    DuplicateDigit {
        /// The duplicated digit (1-9).
        digit: u8,
        /// The unit containing the duplicate (`"row"`, `"column"`, or
        /// `"box"`).
        unit: &'static str,
    },

    /// The requested operation is part of the public contract but has no
    /// implementation.
    #[display("{operation} is not implemented")]
    NotImplemented {
        /// Name of the unimplemented operation.
        operation: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::MalformedPuzzle {
            detail: "expected 81 cells, got 80".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed puzzle string: expected 81 cells, got 80"
        );

        let err = Error::DuplicateDigit {
            digit: 5,
            unit: "row",
        };
        assert_eq!(
            err.to_string(),
            "invalid board: digit 5 appears more than once in a row"
        );

        let err = Error::NotImplemented {
            operation: "DigitSet::symmetric_difference",
        };
        assert_eq!(
            err.to_string(),
            "DigitSet::symmetric_difference is not implemented"
        );
    }
}
