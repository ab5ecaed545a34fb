//! Digit-length validation.
//!
//! Every check here is pure and runs before any randomness is drawn.

use rando_core::error::{DigitPart, WrongLengthError};

use super::bounds::DecimalBound;

/// Checks that a declared length is positive and returns it as a `usize`.
///
/// # Errors
///
/// Returns `WrongLengthError::InvalidLength` for zero or negative lengths.
pub fn positive_length(length: i64) -> Result<usize, WrongLengthError> {
    usize::try_from(length)
        .ok()
        .filter(|len| *len > 0)
        .ok_or(WrongLengthError::InvalidLength { length })
}

/// Number of decimal digits in the absolute value of `value`.
#[must_use]
pub fn digit_count(value: i128) -> usize {
    value.unsigned_abs().to_string().len()
}

/// Checks that an integer bound, when present, has exactly `length` digits.
///
/// # Errors
///
/// Returns `WrongLengthError::BoundMismatch` if the digit counts differ.
pub fn check_integer_bound(bound: Option<i128>, length: usize) -> Result<(), WrongLengthError> {
    let Some(bound) = bound else {
        return Ok(());
    };
    let actual = digit_count(bound);
    if actual == length {
        Ok(())
    } else {
        Err(WrongLengthError::BoundMismatch {
            bound: bound.to_string(),
            part: DigitPart::Integer,
            expected: length,
            actual,
        })
    }
}

/// Checks that a float bound, when present, has `prelength` integer digits and
/// `postlength` fractional digits.
///
/// # Errors
///
/// Returns `WrongLengthError::BoundMismatch` naming the first digit run that
/// differs.
pub fn check_decimal_bound(
    bound: Option<&DecimalBound>,
    prelength: usize,
    postlength: usize,
) -> Result<(), WrongLengthError> {
    let Some(bound) = bound else {
        return Ok(());
    };
    let mismatch = |part, expected, actual| WrongLengthError::BoundMismatch {
        bound: bound.to_string(),
        part,
        expected,
        actual,
    };
    if bound.integer_digits() != prelength {
        return Err(mismatch(
            DigitPart::IntegerPart,
            prelength,
            bound.integer_digits(),
        ));
    }
    if bound.fraction_digits() != postlength {
        return Err(mismatch(
            DigitPart::FractionalPart,
            postlength,
            bound.fraction_digits(),
        ));
    }
    Ok(())
}
