//! Integer literal conversion for calc syntax.
//!
//! The scanner produces literal text without validating it:
//! - Decimal literals are plain digit runs (e.g., `42`)
//! - Hex literals are normalized to a `0X` prefix and uppercase digits (e.g., `0XFF`)
//!
//! This module turns that text into an `i64`, reporting anything that does not
//! fit or is not a valid digit.

use core::num::IntErrorKind;
use thiserror::Error;

/// Errors that can occur when converting literal text to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntLiteralError {
    /// The literal does not fit in a 64-bit signed integer.
    #[error("integer literal '{0}' is too large")]
    Overflow(String),
    /// The literal contains characters that are not valid digits.
    #[error("invalid integer literal '{0}'")]
    InvalidDigit(String),
}

/// Convert scanned literal text to an integer.
///
/// A hex digit is worth `(ch & 0xF)`, plus 9 when it is a letter, so `A`
/// through `F` map to 10 through 15. A bare `0X` with no digits is zero.
///
/// # Example
///
/// ```
/// use calc_core::syntax::int_literal::parse_int_literal;
///
/// assert_eq!(parse_int_literal("0XFF"), Ok(255));
/// assert_eq!(parse_int_literal("42"), Ok(42));
/// ```
pub fn parse_int_literal(lit: &str) -> Result<i64, IntLiteralError> {
    if let Some(digits) = lit.strip_prefix("0X").or_else(|| lit.strip_prefix("0x")) {
        return parse_hex_digits(lit, digits);
    }

    lit.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            IntLiteralError::Overflow(lit.to_string())
        }
        _ => IntLiteralError::InvalidDigit(lit.to_string()),
    })
}

fn parse_hex_digits(lit: &str, digits: &str) -> Result<i64, IntLiteralError> {
    digits.chars().try_fold(0i64, |acc, ch| {
        if !ch.is_ascii_hexdigit() {
            return Err(IntLiteralError::InvalidDigit(lit.to_string()));
        }
        let digit = i64::from(ch as u8 & 0xF) + if ch.is_ascii_alphabetic() { 9 } else { 0 };
        acc.checked_mul(16)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| IntLiteralError::Overflow(lit.to_string()))
    })
}
