//! Check-digit comparison and the IMEI verdict.
//!
//! The expected check digit is `10 - (total % 10)` rendered in decimal. When
//! the total is a multiple of ten this renders as `"10"`, which no single
//! character can equal, so such identifiers never validate. That boundary is
//! kept as-is; do not fold it to `"0"`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::partition::{even_position_digits, odd_position_digits};
use crate::core::reduce::{
    double_sequence, flatten_digits, sum_char_digits, sum_even_doubled_digits, sum_odd_digits,
};
use crate::error::ChecksumError;

/// Number of characters in an IMEI, check digit included.
pub const IMEI_LENGTH: usize = 15;

/// Every intermediate value of one validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumReport {
    pub imei: String,
    pub check_digit: char,
    pub even_digits: Vec<u32>,
    pub doubled: Vec<u32>,
    pub even_doubled_sum: u32,
    pub odd_digits: Vec<u32>,
    pub odd_sum: u32,
    pub total: u32,
    /// Decimal rendering of the expected check digit; `"10"` when `total` is a
    /// multiple of ten.
    pub expected: String,
    pub length_ok: bool,
    pub valid: bool,
}

/// The final character of `s`.
pub fn last_character(s: &str) -> Result<char, ChecksumError> {
    s.chars().last().ok_or(ChecksumError::Empty)
}

/// True if `imei` is 15 characters long and its last character matches the
/// computed check digit.
///
/// Identifiers that cannot be parsed are never valid.
pub fn validate(imei: &str) -> bool {
    match checksum_report(imei) {
        Ok(report) => report.valid,
        Err(err) => {
            debug!(imei, error = %err, "rejecting identifier");
            false
        }
    }
}

/// Run the checksum pipeline over `imei` and keep every intermediate value.
pub fn checksum_report(imei: &str) -> Result<ChecksumReport, ChecksumError> {
    let check_digit = last_character(imei)?;

    let even_digits = even_position_digits(imei)?;
    let doubled = double_sequence(&even_digits);
    let even_doubled_sum = sum_char_digits(&flatten_digits(&doubled))?;

    let odd_digits = odd_position_digits(imei)?;
    let odd_sum: u32 = odd_digits.iter().sum();

    let total = even_doubled_sum + odd_sum;
    let expected = expected_check_digit(total);
    let length_ok = imei.chars().count() == IMEI_LENGTH;
    let valid = check_digit.to_string() == expected && length_ok;
    trace!(imei, total, %expected, valid, "computed checksum");

    Ok(ChecksumReport {
        imei: imei.to_string(),
        check_digit,
        even_digits,
        doubled,
        even_doubled_sum,
        odd_digits,
        odd_sum,
        total,
        expected,
        length_ok,
        valid,
    })
}

/// Expected check digit for a 14-character body.
///
/// Returns `"10"` when no single digit can complete the body.
pub fn check_digit_for(body: &str) -> Result<String, ChecksumError> {
    let actual = body.chars().count();
    if actual != IMEI_LENGTH - 1 {
        return Err(ChecksumError::BodyLength {
            expected: IMEI_LENGTH - 1,
            actual,
        });
    }
    // The placeholder lands on the dropped odd position and never contributes.
    let candidate = format!("{body}0");
    let total = sum_even_doubled_digits(&candidate)? + sum_odd_digits(&candidate)?;
    Ok(expected_check_digit(total))
}

fn expected_check_digit(total: u32) -> String {
    (10 - total % 10).to_string()
}
