//! Core digit-set primitives for number-place (sudoku) modeling.
//!
//! This crate provides [`DigitSet`], a compact set of digits 1-9 backed by a
//! bitmask with a cached cardinality. It is the fundamental unit of state for
//! sudoku modeling: "candidates remaining in this cell", "digits already
//! placed in this row", and so on. Board representation, parsing, and solving
//! are external consumers that compose many `DigitSet` instances; they are
//! deliberately not part of this crate.
//!
//! # Overview
//!
//! The crate is organized around three modules:
//!
//! - [`digit_set`]: The [`DigitSet`] type and its iterator
//! - [`consts`]: Process-wide board dimensions (`LENGTH`, `VALID_RANGE`, ...)
//! - [`error`]: The [`Error`] kinds shared with board-level consumers
//!
//! # Examples
//!
//! ```
//! use digitlace_core::DigitSet;
//!
//! let mut candidates = DigitSet::new(true); // all of 1-9
//! assert!(candidates.remove(5));
//! assert!(candidates.remove(7));
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(5));
//! assert!(candidates.contains(1));
//!
//! // Members always enumerate in ascending order.
//! let mut placed = DigitSet::new(false);
//! placed.insert(9);
//! placed.insert(3);
//! placed.insert(6);
//! assert_eq!(placed.to_vec(), vec![3, 6, 9]);
//! assert_eq!(placed.to_string(), "[3, 6, 9]");
//! ```

pub mod consts;
pub mod digit_set;
pub mod error;

// Re-export commonly used types
pub use self::{digit_set::DigitSet, error::Error};
