//! Parsing of raw form-field text into integers

use std::num::IntErrorKind;
use thiserror::Error;

/// The one error kind the engine recognizes: a field that does not hold an integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("field is empty")]
    Empty,
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
}

/// Parse a form field as an integer.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// Anything else, including values that do not fit in an `i32`, is rejected.
pub fn parse_field(text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

/// Parse a quantity field, saturating integers too large for an `i32`.
///
/// Used for hit points and experience, which are clamped afterwards:
/// `99999999999` reads as `i32::MAX` and is reconciled like any other
/// out-of-range value instead of being rejected.
pub fn parse_field_saturating(text: &str) -> Result<i32, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    match trimmed.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(InputError::NotAnInteger(trimmed.to_string())),
        },
    }
}
