//! Bounded float composition.
//!
//! A float is an integer part and a fractional part, each drawn by the integer
//! sampler at its own fixed length, joined with a decimal point. The whole
//! composition is redrawn until it satisfies the bounds.

use rando_core::error::{GenerationError, WrongLengthError};
use rando_core::limits::SamplingLimits;
use rando_core::rng::RandomnessSource;
use rando_core::scalar::Scalar;
use tracing::{debug, warn};

use super::bounds::DecimalBound;
use super::integer::{IntegerSpec, sample_integer};
use super::validation::{check_decimal_bound, positive_length};
use super::values::FixedDecimal;

/// Constraints for one float draw.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatSpec {
    /// Exact number of digits before the decimal point.
    pub prelength: i64,
    /// Exact number of digits after the decimal point.
    pub postlength: i64,
    /// Inclusive lower bound.
    pub start: Option<DecimalBound>,
    /// Inclusive upper bound. A bound equal to zero is ignored.
    pub end: Option<DecimalBound>,
}

impl FloatSpec {
    /// An unbounded spec.
    #[must_use]
    pub const fn new(prelength: i64, postlength: i64) -> Self {
        Self {
            prelength,
            postlength,
            start: None,
            end: None,
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub fn with_start(mut self, start: DecimalBound) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn with_end(mut self, end: DecimalBound) -> Self {
        self.end = Some(end);
        self
    }

    /// Builds a spec from untyped bounds, refusing booleans before anything
    /// else is looked at.
    ///
    /// # Errors
    ///
    /// Returns `WrongLengthError::BooleanBound` if either bound is a boolean
    /// and `WrongLengthError::MalformedBound` if either is not a decimal.
    pub fn from_scalars(
        prelength: i64,
        postlength: i64,
        start: Option<&Scalar>,
        end: Option<&Scalar>,
    ) -> Result<Self, WrongLengthError> {
        for bound in [start, end].into_iter().flatten() {
            if let Scalar::Bool(value) = bound {
                return Err(WrongLengthError::BooleanBound { value: *value });
            }
        }
        Ok(Self {
            prelength,
            postlength,
            start: start.map(DecimalBound::from_scalar).transpose()?,
            end: end.map(DecimalBound::from_scalar).transpose()?,
        })
    }

    /// Upper bound in effect. An end bound of exactly zero counts as absent.
    fn effective_end(&self) -> Option<f64> {
        self.end
            .as_ref()
            .map(DecimalBound::value)
            .filter(|end| *end != 0.0)
    }

    fn accepts(&self, candidate: f64) -> bool {
        let above_start = self
            .start
            .as_ref()
            .is_none_or(|start| candidate >= start.value());
        let below_end = self.effective_end().is_none_or(|end| candidate <= end);
        above_start && below_end
    }
}

/// Checks lengths and bound shapes for `spec` without drawing anything.
///
/// # Errors
///
/// Returns `WrongLengthError` if a length is not positive or a bound's digit
/// runs do not match the declared lengths.
pub fn validate_float(spec: &FloatSpec) -> Result<(usize, usize), WrongLengthError> {
    let prelength = positive_length(spec.prelength)?;
    let postlength = positive_length(spec.postlength)?;
    check_decimal_bound(spec.start.as_ref(), prelength, postlength)?;
    check_decimal_bound(spec.end.as_ref(), prelength, postlength)?;
    Ok((prelength, postlength))
}

/// Samples a float satisfying `spec` from `source`.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` before drawing anything if the
/// lengths or bounds are inconsistent or a length exceeds the ceiling in
/// `limits`, and `GenerationError::Unsatisfiable` if `limits` runs out first.
pub fn sample_float(
    source: &mut dyn RandomnessSource,
    spec: &FloatSpec,
    limits: &SamplingLimits,
) -> Result<FixedDecimal, GenerationError> {
    let (prelength, postlength) = validate_float(spec)?;
    limits.check_length(prelength)?;
    limits.check_length(postlength)?;
    let integer_spec = IntegerSpec::new(spec.prelength);
    let fraction_spec = IntegerSpec::new(spec.postlength).allowing_leading_zero();

    let mut attempts: u64 = 0;
    loop {
        let integer = sample_integer(source, &integer_spec, limits)?;
        let fraction = sample_integer(source, &fraction_spec, limits)?;
        let candidate = FixedDecimal::new(integer, fraction);
        attempts += 1;
        if spec.accepts(candidate.to_f64()) {
            debug!(prelength, postlength, attempts, "float accepted");
            return Ok(candidate);
        }
        if limits.exhausted(attempts) {
            warn!(prelength, postlength, attempts, "float constraints unsatisfied");
            return Err(GenerationError::Unsatisfiable { attempts });
        }
    }
}
