//! Stable exit codes for the `luhny` binary.

/// Every identifier validated.
pub const OK: i32 = 0;
/// At least one identifier failed its checksum.
pub const INVALID: i32 = 1;
/// Usage, config, I/O, or parse error.
pub const ERROR: i32 = 2;
