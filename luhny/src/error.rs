//! Typed failures raised by the checksum pipeline.

use thiserror::Error;

/// Errors produced while turning an identifier into checksum inputs.
///
/// A wrong-length identifier is not an error: [`crate::validate`] simply
/// answers `false` for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// A character reached a numeric parse step but is not `0`-`9`.
    /// `position` is 1-indexed within the sequence being parsed.
    #[error("non-digit character {character:?} at position {position}")]
    NonDigit { character: char, position: usize },

    /// The identifier has no characters, so there is no check digit.
    #[error("identifier is empty")]
    Empty,

    /// A check-digit body does not have the expected number of characters.
    #[error("check digit body must have {expected} characters, got {actual}")]
    BodyLength { expected: usize, actual: usize },
}
