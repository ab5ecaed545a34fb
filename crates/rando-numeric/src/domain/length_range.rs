//! Inclusive ranges from which a digit length is drawn.

use rando_core::error::WrongLengthError;
use rando_core::limits::SamplingLimits;
use rando_core::rng::RandomnessSource;

/// Smallest length drawn by default.
pub const DEFAULT_MINLEN: i64 = 1;

/// Largest length drawn by default.
pub const DEFAULT_MAXLEN: i64 = 100;

/// An inclusive `[minlen, maxlen]` range of digit lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    /// Smallest length that may be drawn.
    pub minlen: i64,
    /// Largest length that may be drawn.
    pub maxlen: i64,
}

impl LengthRange {
    /// A range of lengths; validated when drawn from.
    #[must_use]
    pub const fn new(minlen: i64, maxlen: i64) -> Self {
        Self { minlen, maxlen }
    }

    /// Checks that the range is non-empty and starts at a positive length.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::InvalidLengthRange` otherwise.
    pub fn validate(&self) -> Result<(), WrongLengthError> {
        if self.minlen > 0 && self.minlen <= self.maxlen {
            Ok(())
        } else {
            Err(WrongLengthError::InvalidLengthRange {
                minlen: self.minlen,
                maxlen: self.maxlen,
            })
        }
    }

    /// Checks the range and that its longest length fits the length ceiling
    /// in `limits`.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::InvalidLengthRange` for an invalid range and
    /// `WrongLengthError::LengthTooLarge` if `maxlen` exceeds the ceiling.
    pub fn check_within(&self, limits: &SamplingLimits) -> Result<(), WrongLengthError> {
        self.validate()?;
        let maxlen = usize::try_from(self.maxlen).unwrap_or(usize::MAX);
        limits.check_length(maxlen)
    }

    /// Draws one length uniformly from the range.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::InvalidLengthRange` if the range is invalid;
    /// nothing is drawn in that case.
    pub fn draw(&self, source: &mut dyn RandomnessSource) -> Result<i64, WrongLengthError> {
        self.validate()?;
        let invalid = || WrongLengthError::InvalidLengthRange {
            minlen: self.minlen,
            maxlen: self.maxlen,
        };
        let min = u64::try_from(self.minlen).map_err(|_| invalid())?;
        let max = u64::try_from(self.maxlen).map_err(|_| invalid())?;
        i64::try_from(source.next_u64_range(min, max)).map_err(|_| invalid())
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::new(DEFAULT_MINLEN, DEFAULT_MAXLEN)
    }
}
