//! Decimal and complex range bounds.
//!
//! A float bound remembers how it was written so its digit shape can be
//! checked against the declared lengths. `"10.00"` has two fractional digits;
//! the float `10.0` has one.

use std::fmt;
use std::str::FromStr;

use rando_core::error::WrongLengthError;
use rando_core::scalar::Scalar;

/// A float bound with its literal digit shape.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalBound {
    text: String,
    integer_digits: usize,
    fraction_digits: usize,
    value: f64,
}

impl DecimalBound {
    /// Builds a bound from an `f64`, using its shortest round-trip form
    /// (`10.0`, `0.25`).
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::MalformedBound` for non-finite values and
    /// values that only print in exponent form.
    pub fn from_f64(value: f64) -> Result<Self, WrongLengthError> {
        format!("{value:?}").parse()
    }

    /// Interprets an untyped scalar as a float bound.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::BooleanBound` for booleans and
    /// `WrongLengthError::MalformedBound` for text that is not a decimal.
    pub fn from_scalar(scalar: &Scalar) -> Result<Self, WrongLengthError> {
        scalar.decimal_text()?.parse()
    }

    /// Digits before the decimal point, sign excluded.
    #[must_use]
    pub fn integer_digits(&self) -> usize {
        self.integer_digits
    }

    /// Digits after the decimal point.
    #[must_use]
    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    /// The numeric value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The bound as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for DecimalBound {
    type Err = WrongLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || WrongLengthError::MalformedBound {
            bound: s.to_owned(),
        };
        let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |run: &str| run.chars().all(|c| c.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
            return Err(malformed());
        }
        let value: f64 = s.parse().map_err(|_| malformed())?;
        if !value.is_finite() {
            return Err(malformed());
        }
        Ok(Self {
            text: s.to_owned(),
            integer_digits: integer.len(),
            fraction_digits: fraction.len(),
            value,
        })
    }
}

impl fmt::Display for DecimalBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A complex bound: one decimal bound per component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBound {
    /// Bound on the real component.
    pub re: DecimalBound,
    /// Bound on the imaginary component.
    pub im: DecimalBound,
}

impl ComplexBound {
    /// Builds a bound from two component bounds.
    #[must_use]
    pub fn new(re: DecimalBound, im: DecimalBound) -> Self {
        Self { re, im }
    }

    /// Builds a bound from two `f64` components.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::MalformedBound` if either component cannot be
    /// written as a plain decimal.
    pub fn from_f64(re: f64, im: f64) -> Result<Self, WrongLengthError> {
        Ok(Self::new(DecimalBound::from_f64(re)?, DecimalBound::from_f64(im)?))
    }

    /// Interprets two untyped scalars as a complex bound.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::BooleanBound` if either component is a
    /// boolean.
    pub fn from_scalars(re: &Scalar, im: &Scalar) -> Result<Self, WrongLengthError> {
        Ok(Self::new(
            DecimalBound::from_scalar(re)?,
            DecimalBound::from_scalar(im)?,
        ))
    }
}
