//! Doubling and digit-sum reduction.

use crate::core::digits::parse_digit;
use crate::core::partition::{even_position_digits, odd_position_digits};
use crate::error::ChecksumError;

/// Double every element, keeping order and length.
pub fn double_sequence(seq: &[u32]) -> Vec<u32> {
    seq.iter().map(|value| value * 2).collect()
}

/// Render each integer in decimal and concatenate the characters.
///
/// `[16, 3]` becomes `['1', '6', '3']`.
pub fn flatten_digits(seq: &[u32]) -> Vec<char> {
    seq.iter()
        .flat_map(|value| value.to_string().chars().collect::<Vec<_>>())
        .collect()
}

/// Parse each character as a digit and add them up.
pub fn sum_char_digits(seq: &[char]) -> Result<u32, ChecksumError> {
    seq.iter()
        .enumerate()
        .map(|(index, c)| parse_digit(*c, index + 1))
        .sum()
}

/// Digit sum of the doubled even-position digits.
///
/// Doubled values of 10 and above contribute each of their digits, so `8`
/// doubles to `16` and adds `1 + 6`.
pub fn sum_even_doubled_digits(s: &str) -> Result<u32, ChecksumError> {
    let doubled = double_sequence(&even_position_digits(s)?);
    sum_char_digits(&flatten_digits(&doubled))
}

/// Plain sum of the odd-position digits (check digit excluded).
pub fn sum_odd_digits(s: &str) -> Result<u32, ChecksumError> {
    Ok(odd_position_digits(s)?.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::VALID_IMEI;

    #[test]
    fn double_preserves_order_and_length() {
        assert_eq!(double_sequence(&[1, 5, 9]), vec![2, 10, 18]);
        assert_eq!(double_sequence(&[]), Vec::<u32>::new());
    }

    #[test]
    fn flatten_splits_multi_digit_values() {
        assert_eq!(flatten_digits(&[16, 3]), vec!['1', '6', '3']);
        assert_eq!(flatten_digits(&[0, 10, 18]), vec!['0', '1', '0', '1', '8']);
    }

    #[test]
    fn sum_char_digits_adds_values() {
        assert_eq!(sum_char_digits(&['1', '6', '3']), Ok(10));
        assert_eq!(sum_char_digits(&[]), Ok(0));
    }

    #[test]
    fn sum_char_digits_rejects_non_digit() {
        assert_eq!(
            sum_char_digits(&['1', '-', '3']),
            Err(ChecksumError::NonDigit {
                character: '-',
                position: 2
            })
        );
    }

    #[test]
    fn even_doubled_sum_explodes_two_digit_values() {
        // 5 8 9 3 2 2 3 -> 10 16 18 6 4 4 6 -> 1 + 7 + 9 + 6 + 4 + 4 + 6
        assert_eq!(sum_even_doubled_digits(VALID_IMEI), Ok(37));
    }

    #[test]
    fn odd_sum_is_not_exploded() {
        assert_eq!(sum_odd_digits(VALID_IMEI), Ok(30));
        assert_eq!(sum_odd_digits("9090"), Ok(9));
    }
}
