//! IMEI check-digit validation with a Luhn-style checksum.
//!
//! The checksum is computed as a pipeline of small pure functions:
//!
//! - **[`core`]**: digit classification, positional partitioning, doubling,
//!   digit-sum reduction, and the final verdict. No I/O.
//! - **[`error`]**: typed failures for characters that cannot be parsed.
//!
//! The `luhny` binary wraps the pipeline with [`config`], [`input`],
//! [`render`], and [`logging`].
//!
//! ```
//! assert!(luhny::validate("353879234252633"));
//! assert!(!luhny::validate("353879234252634"));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod input;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::checksum::{
    ChecksumReport, IMEI_LENGTH, check_digit_for, checksum_report, last_character, validate,
};
pub use crate::core::digits::{is_digit_char, is_digit_string};
pub use crate::core::partition::{even_position_digits, odd_position_digits};
pub use crate::core::reduce::{
    double_sequence, flatten_digits, sum_char_digits, sum_even_doubled_digits, sum_odd_digits,
};
pub use crate::error::ChecksumError;
