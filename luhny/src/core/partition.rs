//! Positional partitioning of an identifier into digit sequences.
//!
//! Positions are 1-indexed over characters. Even positions feed the doubled
//! sum; odd positions, minus the trailing check digit, feed the plain sum.

use crate::core::digits::parse_digit;
use crate::error::ChecksumError;

/// Digits at even positions (2, 4, 6, ...), left to right.
pub fn even_position_digits(s: &str) -> Result<Vec<u32>, ChecksumError> {
    digits_at(s, |position| position % 2 == 0)
}

/// Digits at odd positions (1, 3, 5, ...), left to right, with the last one
/// dropped.
///
/// For a 15-character IMEI the dropped digit is the check digit. Dropping from
/// an empty sequence leaves it empty.
pub fn odd_position_digits(s: &str) -> Result<Vec<u32>, ChecksumError> {
    let mut digits = digits_at(s, |position| position % 2 == 1)?;
    digits.pop();
    Ok(digits)
}

fn digits_at(s: &str, keep: impl Fn(usize) -> bool) -> Result<Vec<u32>, ChecksumError> {
    s.chars()
        .enumerate()
        .map(|(index, c)| (index + 1, c))
        .filter(|(position, _)| keep(*position))
        .map(|(position, c)| parse_digit(c, position))
        .collect()
}
