//! Untyped bound values as they arrive from JSON or other loosely typed input.

use serde::{Deserialize, Serialize};

use crate::error::WrongLengthError;

/// A scalar bound before it has been interpreted for a particular generator.
///
/// Booleans are kept distinct so they can be refused instead of being read as
/// `0` or `1`. Text is accepted so that decimal bounds can keep trailing
/// fractional zeros (`"10.00"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A boolean.
    Bool(bool),
    /// A whole number.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A number written out as text.
    Text(String),
}

impl Scalar {
    /// Interprets the scalar as an integer bound.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::BooleanBound` for booleans and
    /// `WrongLengthError::MalformedBound` for anything that is not a whole
    /// number.
    pub fn as_integer_bound(&self) -> Result<i128, WrongLengthError> {
        match self {
            Self::Bool(value) => Err(WrongLengthError::BooleanBound { value: *value }),
            Self::Integer(value) => Ok(i128::from(*value)),
            Self::Float(value) => Err(WrongLengthError::MalformedBound {
                bound: format!("{value:?}"),
            }),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| WrongLengthError::MalformedBound {
                    bound: text.clone(),
                }),
        }
    }

    /// Renders the scalar as decimal text suitable for a float bound.
    ///
    /// Whole numbers gain a `.0` fraction, floats use their shortest
    /// round-trip form, and text is passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::BooleanBound` for booleans.
    pub fn decimal_text(&self) -> Result<String, WrongLengthError> {
        match self {
            Self::Bool(value) => Err(WrongLengthError::BooleanBound { value: *value }),
            Self::Integer(value) => Ok(format!("{value}.0")),
            Self::Float(value) => Ok(format!("{value:?}")),
            Self::Text(text) => Ok(text.trim().to_owned()),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
