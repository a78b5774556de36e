//! Decimal digit classification.

use crate::error::ChecksumError;

/// True if `c` is one of the ASCII decimal digits `0`-`9`.
pub fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

/// True if every character of `s` is a decimal digit.
///
/// The empty string has no failing character and is accepted.
pub fn is_digit_string(s: &str) -> bool {
    s.chars().all(is_digit_char)
}

/// Parse a single decimal digit. `position` is reported back on failure.
pub fn parse_digit(c: char, position: usize) -> Result<u32, ChecksumError> {
    c.to_digit(10).ok_or(ChecksumError::NonDigit {
            character: c,
            position,
        })
}
