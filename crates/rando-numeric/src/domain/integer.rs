//! Bounded integer sampling.
//!
//! Draws a fixed-length digit string, redraws away an accidental leading zero,
//! and rejects the whole draw until it falls inside the requested bounds.

use std::cmp::Ordering;

use rando_core::error::GenerationError;
use rando_core::limits::SamplingLimits;
use rando_core::rng::{RandomnessSource, choose};
use tracing::{debug, warn};

use super::validation::{check_integer_bound, positive_length};
use super::values::{DIGITS, DigitString};

/// Constraints for one integer draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerSpec {
    /// Exact number of digits.
    pub length: i64,
    /// Inclusive lower bound.
    pub start: Option<i128>,
    /// Inclusive upper bound.
    pub end: Option<i128>,
    /// Keep a leading zero instead of redrawing it.
    pub allow_leading_zero: bool,
}

impl IntegerSpec {
    /// An unbounded spec for `length` digits with leading zeros suppressed.
    #[must_use]
    pub const fn new(length: i64) -> Self {
        Self {
            length,
            start: None,
            end: None,
            allow_leading_zero: false,
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub const fn with_start(mut self, start: i128) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub const fn with_end(mut self, end: i128) -> Self {
        self.end = Some(end);
        self
    }

    /// Permits the first digit to be zero.
    #[must_use]
    pub const fn allowing_leading_zero(mut self) -> Self {
        self.allow_leading_zero = true;
        self
    }

    fn accepts(&self, candidate: &DigitString) -> bool {
        let above_start = self
            .start
            .is_none_or(|start| candidate.cmp_bound(start) != Ordering::Less);
        let below_end = self
            .end
            .is_none_or(|end| candidate.cmp_bound(end) != Ordering::Greater);
        above_start && below_end
    }
}

/// Samples an integer satisfying `spec` from `source`.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` before drawing anything if the length
/// is not positive, exceeds the length ceiling in `limits`, or a bound has the
/// wrong number of digits. Returns `GenerationError::Allocation` if the digit
/// buffer cannot be reserved, and `GenerationError::Unsatisfiable` if `limits`
/// runs out before a draw lands inside the bounds.
pub fn sample_integer(
    source: &mut dyn RandomnessSource,
    spec: &IntegerSpec,
    limits: &SamplingLimits,
) -> Result<DigitString, GenerationError> {
    let length = positive_length(spec.length)?;
    limits.check_length(length)?;
    check_integer_bound(spec.start, length)?;
    check_integer_bound(spec.end, length)?;

    let suppress_leading_zero = !spec.allow_leading_zero && length != 1;
    let mut attempts: u64 = 0;
    loop {
        let candidate = draw_digits(source, length, suppress_leading_zero)?;
        attempts += 1;
        if spec.accepts(&candidate) {
            debug!(length, attempts, "integer accepted");
            return Ok(candidate);
        }
        if limits.exhausted(attempts) {
            warn!(length, attempts, start = ?spec.start, end = ?spec.end, "integer constraints unsatisfied");
            return Err(GenerationError::Unsatisfiable { attempts });
        }
    }
}

fn draw_digit(source: &mut dyn RandomnessSource) -> char {
    // DIGITS is never empty.
    choose(source, &DIGITS).copied().unwrap_or('0')
}

/// Draws `length` independent digits. With suppression on, a leading zero is
/// dropped and a fresh digit appended until the first digit is non-zero.
fn draw_digits(
    source: &mut dyn RandomnessSource,
    length: usize,
    suppress_leading_zero: bool,
) -> Result<DigitString, GenerationError> {
    let mut digits = String::new();
    digits
        .try_reserve_exact(length)
        .map_err(|_| GenerationError::Allocation { length })?;
    digits.extend((0..length).map(|_| draw_digit(source)));
    if suppress_leading_zero {
        while digits.starts_with('0') {
            digits.remove(0);
            digits.push(draw_digit(source));
        }
    }
    Ok(DigitString::new(digits))
}
