//! The checksum pipeline.
//!
//! Core modules are pure: they take the identifier by reference, derive fresh
//! values, and return. Each stage feeds the next:
//!
//! - [`digits`]: single-character classification and parsing.
//! - [`partition`]: split an identifier into even- and odd-position digits.
//! - [`reduce`]: doubling and digit-sum reduction.
//! - [`checksum`]: check-digit comparison and the final verdict.

pub mod checksum;
pub mod digits;
pub mod partition;
pub mod reduce;
