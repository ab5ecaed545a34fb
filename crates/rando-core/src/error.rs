//! Generation error types.

use std::fmt;

use thiserror::Error;

/// Which digit run of a bound was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPart {
    /// A whole integer.
    Integer,
    /// The digits before the decimal point.
    IntegerPart,
    /// The digits after the decimal point.
    FractionalPart,
}

impl fmt::Display for DigitPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Integer => "integer",
            Self::IntegerPart => "integer part",
            Self::FractionalPart => "fractional part",
        };
        f.write_str(label)
    }
}

/// A declared length, or a bound measured against it, is unusable.
///
/// Always raised before any randomness is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrongLengthError {
    /// A declared length is zero or negative.
    #[error("invalid length: {length}")]
    InvalidLength {
        /// The offending length.
        length: i64,
    },

    /// A bound's digit count differs from the declared length.
    #[error("bound {bound} has {actual} digits in its {part}, expected {expected}")]
    BoundMismatch {
        /// The bound as written.
        bound: String,
        /// The digit run that was measured.
        part: DigitPart,
        /// The declared length.
        expected: usize,
        /// The digit count found.
        actual: usize,
    },

    /// A boolean was supplied where a numeric bound is expected.
    #[error("boolean {value} is not a numeric bound")]
    BooleanBound {
        /// The boolean that was supplied.
        value: bool,
    },

    /// A textual bound is not a plain decimal number.
    #[error("bound {bound:?} is not a plain decimal number")]
    MalformedBound {
        /// The bound as written.
        bound: String,
    },

    /// A declared length exceeds the configured length ceiling.
    #[error("length {length} exceeds the maximum of {max} digits")]
    LengthTooLarge {
        /// The offending length.
        length: usize,
        /// The configured ceiling.
        max: usize,
    },

    /// A random-length range is empty or starts at a non-positive length.
    #[error("invalid length range: minlen {minlen}, maxlen {maxlen}")]
    InvalidLengthRange {
        /// Smallest length that may be drawn.
        minlen: i64,
        /// Largest length that may be drawn.
        maxlen: i64,
    },
}

/// Top-level error returned by every generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The constraints were rejected before sampling began.
    #[error(transparent)]
    WrongLength(#[from] WrongLengthError),

    /// The digit buffer for a draw could not be allocated.
    #[error("could not allocate {length} digits")]
    Allocation {
        /// Number of digits requested.
        length: usize,
    },

    /// The rejection loop hit its attempt ceiling without an acceptable draw.
    #[error("no value satisfied the constraints after {attempts} attempts")]
    Unsatisfiable {
        /// Number of whole draws that were rejected.
        attempts: u64,
    },
}

impl GenerationError {
    /// Returns `true` for every length-validation failure.
    #[must_use]
    pub fn is_wrong_length(&self) -> bool {
        matches!(self, Self::WrongLength(_))
    }
}
