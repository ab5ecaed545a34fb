//! Resource limits for the rejection-sampling loops.

use std::num::{NonZeroU64, NonZeroUsize};

use crate::error::WrongLengthError;

/// Attempts allowed per rejection loop unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// How many whole draws a rejection loop may discard before giving up, and
/// how many digits a single length may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingLimits {
    max_attempts: Option<NonZeroU64>,
    max_length: Option<NonZeroUsize>,
}

impl SamplingLimits {
    /// Give up after `max_attempts` rejected draws.
    #[must_use]
    pub const fn with_max_attempts(max_attempts: NonZeroU64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            max_length: None,
        }
    }

    /// Retry forever. Unsatisfiable constraints never return.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_attempts: None,
            max_length: None,
        }
    }

    /// Refuse any declared length above `max_length` digits.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: NonZeroUsize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// The configured attempt ceiling, if any.
    #[must_use]
    pub const fn max_attempts(&self) -> Option<NonZeroU64> {
        self.max_attempts
    }

    /// The configured length ceiling, if any.
    #[must_use]
    pub const fn max_length(&self) -> Option<NonZeroUsize> {
        self.max_length
    }

    /// Returns `true` once `attempts` draws have been used up.
    #[must_use]
    pub fn exhausted(&self, attempts: u64) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max.get())
    }

    /// Checks a declared length against the length ceiling.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::LengthTooLarge` if `length` exceeds it.
    pub fn check_length(&self, length: usize) -> Result<(), WrongLengthError> {
        match self.max_length {
            Some(max) if length > max.get() => Err(WrongLengthError::LengthTooLarge {
                length,
                max: max.get(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for SamplingLimits {
    fn default() -> Self {
        Self::with_max_attempts(NonZeroU64::new(DEFAULT_MAX_ATTEMPTS).unwrap_or(NonZeroU64::MIN))
    }
}
