//! Turns a line of console text into a column index the engine can accept.

use std::num::{IntErrorKind, ParseIntError};

use crate::error::InputError;

/// Parse `raw` as a column on a board `width` columns wide.
///
/// Surrounding whitespace is ignored. The value must be an integer in
/// `0..width`.
pub fn parse_column(raw: &str, width: usize) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    let max = width.saturating_sub(1);
    let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        // Digits too long for i64 are still integers, just far off the board
        IntErrorKind::PosOverflow => InputError::OutOfRange {
            value: i64::MAX,
            max,
        },
        IntErrorKind::NegOverflow => InputError::OutOfRange {
            value: i64::MIN,
            max,
        },
        _ => InputError::NotAnInteger(trimmed.to_string()),
    })?;

    match usize::try_from(value) {
        Ok(col) if col <= max => Ok(col),
        _ => Err(InputError::OutOfRange { value, max }),
    }
}
