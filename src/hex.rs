//! Hex byte parsing for the interactive loop.

use std::num::IntErrorKind;
use thiserror::Error;

/// Errors from interpreting a typed line as a single hex byte.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty.
    #[error("empty input: expected a hex byte value")]
    Empty,

    /// The line contained a character outside `0-9A-Fa-f`.
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),

    /// The value does not fit in an unsigned 8-bit field.
    #[error("value {0:?} does not fit in a single byte (00-FF)")]
    OutOfRange(String),
}

/// Interpret an entire input line as a base-16 byte value.
///
/// The whole line must be hex digits: no `0x` prefix, no sign, no
/// whitespace. Leading zeros are accepted. Values above `FF` are rejected
/// rather than wrapped or saturated.
pub fn parse_hex_byte(line: &str) -> Result<u8, ParseError> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    // from_str_radix also accepts a leading `+`, which is not a hex digit.
    if !line.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidDigit(line.to_string()));
    }

    u8::from_str_radix(line, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ParseError::OutOfRange(line.to_string()),
        _ => ParseError::InvalidDigit(line.to_string()),
    })
}
