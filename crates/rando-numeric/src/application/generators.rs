//! Public generators, one non-secure and one secure entry point per
//! capability.
//!
//! Non-secure generators draw from a thread-local `FastRng`; secure ones from
//! a thread-local `SecureRng`. Both delegate to the same domain samplers.

use std::cell::RefCell;

use rando_core::error::GenerationError;
use rando_core::limits::SamplingLimits;
use rando_core::rng::{FastRng, RandomnessSource, SecureRng};
use tracing::instrument;

use crate::domain::complex::{ComplexSpec, sample_complex};
use crate::domain::float::{FloatSpec, sample_float};
use crate::domain::integer::{IntegerSpec, sample_integer};
use crate::domain::values::{Complex, DigitString, FixedDecimal};

thread_local! {
    static FAST_RNG: RefCell<FastRng> = RefCell::new(FastRng::from_os_rng());
    static SECURE_RNG: RefCell<SecureRng> = RefCell::new(SecureRng::from_os_rng());
}

/// Runs `f` with this thread's fast, non-secure source.
pub fn with_fast_rng<T>(f: impl FnOnce(&mut dyn RandomnessSource) -> T) -> T {
    FAST_RNG.with_borrow_mut(|rng| f(rng))
}

/// Runs `f` with this thread's cryptographically secure source.
pub fn with_secure_rng<T>(f: impl FnOnce(&mut dyn RandomnessSource) -> T) -> T {
    SECURE_RNG.with_borrow_mut(|rng| f(rng))
}

/// Generates an integer with the fast source.
///
/// # Errors
///
/// See [`sample_integer`].
#[instrument(level = "debug", skip_all, fields(length = spec.length))]
pub fn random_integer(spec: &IntegerSpec) -> Result<DigitString, GenerationError> {
    with_fast_rng(|rng| sample_integer(rng, spec, &SamplingLimits::default()))
}

/// Generates an integer with the secure source.
///
/// # Errors
///
/// See [`sample_integer`].
#[instrument(level = "debug", skip_all, fields(length = spec.length))]
pub fn secure_integer(spec: &IntegerSpec) -> Result<DigitString, GenerationError> {
    with_secure_rng(|rng| sample_integer(rng, spec, &SamplingLimits::default()))
}

/// Generates a float with the fast source.
///
/// # Errors
///
/// See [`sample_float`].
#[instrument(level = "debug", skip_all, fields(prelength = spec.prelength, postlength = spec.postlength))]
pub fn random_float(spec: &FloatSpec) -> Result<FixedDecimal, GenerationError> {
    with_fast_rng(|rng| sample_float(rng, spec, &SamplingLimits::default()))
}

/// Generates a float with the secure source.
///
/// # Errors
///
/// See [`sample_float`].
#[instrument(level = "debug", skip_all, fields(prelength = spec.prelength, postlength = spec.postlength))]
pub fn secure_float(spec: &FloatSpec) -> Result<FixedDecimal, GenerationError> {
    with_secure_rng(|rng| sample_float(rng, spec, &SamplingLimits::default()))
}

/// Generates a complex number with the fast source.
///
/// # Errors
///
/// See [`sample_complex`].
#[instrument(level = "debug", skip_all)]
pub fn random_complex(spec: &ComplexSpec) -> Result<Complex, GenerationError> {
    with_fast_rng(|rng| sample_complex(rng, spec, &SamplingLimits::default()))
}

/// Generates a complex number with the secure source.
///
/// # Errors
///
/// See [`sample_complex`].
#[instrument(level = "debug", skip_all)]
pub fn secure_complex(spec: &ComplexSpec) -> Result<Complex, GenerationError> {
    with_secure_rng(|rng| sample_complex(rng, spec, &SamplingLimits::default()))
}
