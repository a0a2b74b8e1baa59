//! A set of digits from 1 to 9, optimized for sudoku cells.
//!
//! This module provides [`DigitSet`], a fixed-universe set over the digits
//! 1-9 with constant-time membership, insertion, removal, and cardinality.
//!
//! # Examples
//!
//! ```
//! use digitlace_core::DigitSet;
//!
//! let mut set = DigitSet::new(false);
//! set.insert(1);
//! set.insert(5);
//! set.insert(9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(5));
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{
    consts::{LENGTH, NO_DIGIT, VALID_RANGE},
    error::Error,
};

/// A set of digits from 1 to 9, represented as a bitmask with a cached
/// cardinality.
///
/// Bit position equals digit value: bit `d` of `mask` is set iff digit `d`
/// is a member. Bit 0 and bits above 9 are always zero, and `size` always
/// equals `mask.count_ones()`; every mutation maintains both invariants.
///
/// Out-of-range values are never errors: membership queries report them as
/// absent and mutations report them as no-ops through their boolean return
/// value. The value 0 is the "no digit / unknown cell" sentinel and is a
/// universal no-op for [`insert`](Self::insert) and [`remove`](Self::remove).
///
/// # Examples
///
/// ```
/// use digitlace_core::DigitSet;
///
/// // Start with all candidates available
/// let mut candidates = DigitSet::FULL;
///
/// // Remove some digits
/// candidates.remove(5);
/// candidates.remove(7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(5));
/// assert!(candidates.contains(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    /// Bit `d` is set iff digit `d` is a member (bits 1-9 only).
    mask: u16,
    /// Cached `mask.count_ones()`, kept in lockstep by every mutation.
    size: u8,
}

/// Bits 1-9 set, bit 0 clear.
const MASK_ALL: u16 = 0b11_1111_1110;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { mask: 0, size: 0 };

    /// The set containing all digits 1-9.
    pub const FULL: Self = Self {
        mask: MASK_ALL,
        size: LENGTH,
    };

    /// Creates a new set, empty when `filled` is `false` and containing all
    /// of 1-9 when `filled` is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitlace_core::DigitSet;
    ///
    /// assert_eq!(DigitSet::new(false), DigitSet::EMPTY);
    /// assert_eq!(DigitSet::new(true), DigitSet::FULL);
    /// ```
    #[must_use]
    pub const fn new(filled: bool) -> Self {
        if filled { Self::FULL } else { Self::EMPTY }
    }

    const fn bit(digit: u8) -> u16 {
        1 << digit
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns `true` if the set contains at least one digit.
    ///
    /// Note that despite the name this is a non-empty check, **not** a
    /// "contains all nine digits" check: a set holding a single digit is
    /// already "filled". The name is kept for compatibility with the
    /// historical contract; use `len() == 9` to test for the full set.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.mask != 0
    }

    /// Returns `true` if `digit` is a member of the set.
    ///
    /// Any value outside 1-9 (including the 0 sentinel) is reported as
    /// absent.
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        VALID_RANGE.contains(&digit) && self.mask & Self::bit(digit) != 0
    }

    /// Returns `true` if `digit` is not a member of the set.
    ///
    /// The logical negation of [`contains`](Self::contains): values outside
    /// 1-9 are always excluded.
    #[must_use]
    pub fn excludes(&self, digit: u8) -> bool {
        !self.contains(digit)
    }

    /// Returns the number of digits in the set.
    ///
    /// O(1): the cardinality is cached alongside the mask, not recomputed.
    #[must_use]
    pub const fn len(&self) -> u8 {
        self.size
    }

    /// Inserts a digit into the set.
    ///
    /// Returns `true` if the set changed. The 0 sentinel is a universal
    /// no-op reported as `true`; values outside 1-9 and digits already
    /// present leave the set unchanged and return `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitlace_core::DigitSet;
    ///
    /// let mut set = DigitSet::new(false);
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3)); // already present
    /// assert!(set.insert(0)); // sentinel, no-op
    /// assert!(!set.insert(10)); // out of range
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, digit: u8) -> bool {
        if digit == NO_DIGIT {
            return true;
        }
        if !VALID_RANGE.contains(&digit) || self.contains(digit) {
            return false;
        }
        self.mask |= Self::bit(digit);
        self.size += 1;
        debug_assert_eq!(u32::from(self.size), self.mask.count_ones());
        true
    }

    /// Removes a digit from the set.
    ///
    /// Returns `true` if the set changed. The 0 sentinel is a universal
    /// no-op reported as `true`; values outside 1-9 and digits not present
    /// leave the set unchanged and return `false`.
    pub fn remove(&mut self, digit: u8) -> bool {
        if digit == NO_DIGIT {
            return true;
        }
        if !self.contains(digit) {
            return false;
        }
        self.mask &= !Self::bit(digit);
        self.size -= 1;
        debug_assert_eq!(u32::from(self.size), self.mask.count_ones());
        true
    }

    /// Resets the set to empty. Always succeeds and returns `true`.
    pub fn clear(&mut self) -> bool {
        *self = Self::EMPTY;
        true
    }

    /// Replaces this set with the symmetric difference of itself and
    /// `other`.
    ///
    /// Known gap: this operation is declared for contract parity but has no
    /// implementation, and the set is never touched.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::NotImplemented`].
    #[expect(clippy::unused_self)]
    pub fn symmetric_difference(&mut self, _other: Self) -> Result<(), Error> {
        Err(Error::NotImplemented {
            operation: "DigitSet::symmetric_difference",
        })
    }

    /// Returns the members of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitlace_core::DigitSet;
    ///
    /// let set: DigitSet = [9, 1, 5].into_iter().collect();
    /// assert_eq!(set.to_vec(), vec![1, 5, 9]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Returns an iterator over the members in ascending order.
    ///
    /// Each call starts a fresh traversal of the set's current contents.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter {
            mask: self.mask,
            next: 1,
        }
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}")?;
        }
        f.write_str("]")
    }
}

impl FromIterator<u8> for DigitSet {
    /// Collects digits into a set through the same guarded
    /// [`insert`](DigitSet::insert), so sentinels, out-of-range values, and
    /// duplicates are silently skipped.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DigitSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`DigitSet`] in ascending order.
///
/// Created by [`DigitSet::iter`]. Holds a snapshot of the mask, so later
/// mutation of the set does not affect an iteration in progress.
#[derive(Debug, Clone)]
pub struct Iter {
    mask: u16,
    next: u8,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next <= LENGTH {
            let digit = self.next;
            self.next += 1;
            if self.mask & DigitSet::bit(digit) != 0 {
                return Some(digit);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Digits >= self.next are exactly the bits surviving the shift.
        #[expect(clippy::cast_possible_truncation)]
        let remaining = (self.mask >> self.next).count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
