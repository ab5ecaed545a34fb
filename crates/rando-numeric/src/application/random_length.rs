//! Random-length variants: each length is drawn from a [`LengthRange`]
//! before the fixed-length generator runs without bounds.

use rando_core::error::GenerationError;
use rando_core::limits::SamplingLimits;
use rando_core::rng::RandomnessSource;
use tracing::{debug, instrument};

use super::generators::{with_fast_rng, with_secure_rng};
use crate::domain::complex::{ComplexSpec, sample_complex};
use crate::domain::float::{FloatSpec, sample_float};
use crate::domain::integer::{IntegerSpec, sample_integer};
use crate::domain::length_range::LengthRange;
use crate::domain::values::{Complex, DigitString, FixedDecimal};

/// Samples an integer whose length is drawn from `range`.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if `range` is invalid or reaches
/// past the length ceiling in `limits`.
pub fn sample_integer_of_random_length(
    source: &mut dyn RandomnessSource,
    range: &LengthRange,
    limits: &SamplingLimits,
) -> Result<DigitString, GenerationError> {
    range.check_within(limits)?;
    let length = range.draw(source)?;
    debug!(length, "integer length drawn");
    sample_integer(source, &IntegerSpec::new(length), limits)
}

/// Samples a float whose integer and fractional lengths are each drawn from
/// `range`.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if `range` is invalid or reaches
/// past the length ceiling in `limits`.
pub fn sample_float_of_random_length(
    source: &mut dyn RandomnessSource,
    range: &LengthRange,
    limits: &SamplingLimits,
) -> Result<FixedDecimal, GenerationError> {
    range.check_within(limits)?;
    let prelength = range.draw(source)?;
    let postlength = range.draw(source)?;
    debug!(prelength, postlength, "float lengths drawn");
    sample_float(source, &FloatSpec::new(prelength, postlength), limits)
}

/// Samples a complex number whose four component lengths are each drawn from
/// `range`.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if `range` is invalid or reaches
/// past the length ceiling in `limits`.
pub fn sample_complex_of_random_length(
    source: &mut dyn RandomnessSource,
    range: &LengthRange,
    limits: &SamplingLimits,
) -> Result<Complex, GenerationError> {
    range.check_within(limits)?;
    let spec = ComplexSpec::new(
        range.draw(source)?,
        range.draw(source)?,
        range.draw(source)?,
        range.draw(source)?,
    );
    sample_complex(source, &spec, limits)
}

/// Integer of random length, fast source.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if the range is invalid.
#[instrument(level = "debug")]
pub fn random_integer_len(minlen: i64, maxlen: i64) -> Result<DigitString, GenerationError> {
    let range = LengthRange::new(minlen, maxlen);
    with_fast_rng(|rng| sample_integer_of_random_length(rng, &range, &SamplingLimits::default()))
}

/// Integer of random length, secure source.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if the range is invalid.
#[instrument(level = "debug")]
pub fn secure_integer_len(minlen: i64, maxlen: i64) -> Result<DigitString, GenerationError> {
    let range = LengthRange::new(minlen, maxlen);
    with_secure_rng(|rng| sample_integer_of_random_length(rng, &range, &SamplingLimits::default()))
}

/// Float of random lengths, fast source.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if the range is invalid.
#[instrument(level = "debug")]
pub fn random_float_len(minlen: i64, maxlen: i64) -> Result<FixedDecimal, GenerationError> {
    let range = LengthRange::new(minlen, maxlen);
    with_fast_rng(|rng| sample_float_of_random_length(rng, &range, &SamplingLimits::default()))
}

/// Float of random lengths, secure source.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if the range is invalid.
#[instrument(level = "debug")]
pub fn secure_float_len(minlen: i64, maxlen: i64) -> Result<FixedDecimal, GenerationError> {
    let range = LengthRange::new(minlen, maxlen);
    with_secure_rng(|rng| sample_float_of_random_length(rng, &range, &SamplingLimits::default()))
}

/// Complex number of random lengths, fast source.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if the range is invalid.
#[instrument(level = "debug")]
pub fn random_complex_len(minlen: i64, maxlen: i64) -> Result<Complex, GenerationError> {
    let range = LengthRange::new(minlen, maxlen);
    with_fast_rng(|rng| sample_complex_of_random_length(rng, &range, &SamplingLimits::default()))
}

/// Complex number of random lengths, secure source.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if the range is invalid.
#[instrument(level = "debug")]
pub fn secure_complex_len(minlen: i64, maxlen: i64) -> Result<Complex, GenerationError> {
    let range = LengthRange::new(minlen, maxlen);
    with_secure_rng(|rng| sample_complex_of_random_length(rng, &range, &SamplingLimits::default()))
}
