//! Bounded complex composition.
//!
//! Real and imaginary parts are drawn independently by the float composer and
//! each is compared against the matching component of the bounds.

use rando_core::error::GenerationError;
use rando_core::limits::SamplingLimits;
use rando_core::rng::RandomnessSource;
use tracing::{debug, warn};

use super::bounds::ComplexBound;
use super::float::{FloatSpec, sample_float};
use super::validation::positive_length;
use super::values::Complex;

/// Constraints for one complex draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSpec {
    /// Integer digits of the real part.
    pub real_prelength: i64,
    /// Fractional digits of the real part.
    pub real_postlength: i64,
    /// Integer digits of the imaginary part.
    pub imag_prelength: i64,
    /// Fractional digits of the imaginary part.
    pub imag_postlength: i64,
    /// Lower bound, compared per component.
    pub start: Option<ComplexBound>,
    /// Upper bound, compared per component.
    pub end: Option<ComplexBound>,
}

impl ComplexSpec {
    /// An unbounded spec.
    #[must_use]
    pub const fn new(
        real_prelength: i64,
        real_postlength: i64,
        imag_prelength: i64,
        imag_postlength: i64,
    ) -> Self {
        Self {
            real_prelength,
            real_postlength,
            imag_prelength,
            imag_postlength,
            start: None,
            end: None,
        }
    }

    /// Sets the lower bound.
    #[must_use]
    pub fn with_start(mut self, start: ComplexBound) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn with_end(mut self, end: ComplexBound) -> Self {
        self.end = Some(end);
        self
    }

    fn real_spec(&self) -> FloatSpec {
        FloatSpec::new(self.real_prelength, self.real_postlength)
    }

    fn imag_spec(&self) -> FloatSpec {
        FloatSpec::new(self.imag_prelength, self.imag_postlength)
    }

    /// Component-wise acceptance. A lone lower bound checks the imaginary
    /// part with `<=`, matching the long-standing behaviour of this check.
    fn accepts(&self, re: f64, im: f64) -> bool {
        match (&self.start, &self.end) {
            (None, None) => true,
            (None, Some(end)) => re <= end.re.value() && im <= end.im.value(),
            (Some(start), None) => re >= start.re.value() && im <= start.im.value(),
            (Some(start), Some(end)) => {
                (start.re.value()..=end.re.value()).contains(&re)
                    && (start.im.value()..=end.im.value()).contains(&im)
            }
        }
    }
}

/// Samples a complex number satisfying `spec` from `source`.
///
/// Each supplied bound is first checked by running the float composer with
/// that component as its only bound; the value drawn there is discarded.
///
/// # Errors
///
/// Returns `GenerationError::WrongLength` if any length is not positive or
/// above the ceiling in `limits`, or a bound component does not match its
/// lengths, and `GenerationError::Unsatisfiable` if `limits` runs out first.
pub fn sample_complex(
    source: &mut dyn RandomnessSource,
    spec: &ComplexSpec,
    limits: &SamplingLimits,
) -> Result<Complex, GenerationError> {
    for length in [
        spec.real_prelength,
        spec.real_postlength,
        spec.imag_prelength,
        spec.imag_postlength,
    ] {
        limits.check_length(positive_length(length)?)?;
    }

    if let Some(start) = &spec.start {
        sample_float(source, &spec.real_spec().with_start(start.re.clone()), limits)?;
        sample_float(source, &spec.imag_spec().with_start(start.im.clone()), limits)?;
    }
    if let Some(end) = &spec.end {
        sample_float(source, &spec.real_spec().with_end(end.re.clone()), limits)?;
        sample_float(source, &spec.imag_spec().with_end(end.im.clone()), limits)?;
    }

    let real_spec = spec.real_spec();
    let imag_spec = spec.imag_spec();
    let mut attempts: u64 = 0;
    loop {
        let real = sample_float(source, &real_spec, limits)?;
        let imag = sample_float(source, &imag_spec, limits)?;
        let candidate = Complex::new(real, imag);
        attempts += 1;
        if spec.accepts(candidate.re(), candidate.im()) {
            debug!(attempts, "complex accepted");
            return Ok(candidate);
        }
        if limits.exhausted(attempts) {
            warn!(attempts, "complex constraints unsatisfied");
            return Err(GenerationError::Unsatisfiable { attempts });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use rando_core::error::WrongLengthError;
    use rando_core::rng::FastRng;
    use rando_test_support::{CountingRng, PanickingRng, SequenceRng};

    fn bound(re: &str, im: &str) -> ComplexBound {
        ComplexBound::new(re.parse().unwrap(), im.parse().unwrap())
    }

    fn sample(source: &mut dyn RandomnessSource, spec: &ComplexSpec) -> Complex {
        sample_complex(source, spec, &SamplingLimits::default()).unwrap()
    }

    #[test]
    fn test_unbounded_components_follow_their_own_lengths() {
        let mut rng = FastRng::seeded(12);
        let spec = ComplexSpec::new(1, 2, 3, 4);

        for _ in 0..200 {
            let value = sample(&mut rng, &spec);
            assert_eq!(value.real().integer_digits().len(), 1);
            assert_eq!(value.real().fraction_digits().len(), 2);
            assert_eq!(value.imag().integer_digits().len(), 3);
            assert_eq!(value.imag().fraction_digits().len(), 4);
        }
    }

    #[test]
    fn test_scripted_components() {
        // Real 3.1, imaginary 7.4.
        let mut rng = SequenceRng::from_digits("3174");

        let value = sample(&mut rng, &ComplexSpec::new(1, 1, 1, 1));

        assert_eq!(value.to_string(), "3.1+7.4i");
    }

    #[test]
    fn test_both_bounds_constrain_each_component() {
        let mut rng = FastRng::seeded(21);
        let spec = ComplexSpec::new(1, 1, 1, 1)
            .with_start(bound("2.0", "3.0"))
            .with_end(bound("6.0", "8.0"));

        for _ in 0..200 {
            let value = sample(&mut rng, &spec);
            assert!((2.0..=6.0).contains(&value.re()), "re {}", value.re());
            assert!((3.0..=8.0).contains(&value.im()), "im {}", value.im());
        }
    }

    #[test]
    fn test_upper_bound_only() {
        let mut rng = FastRng::seeded(22);
        let spec = ComplexSpec::new(1, 1, 1, 1).with_end(bound("5.0", "4.0"));

        for _ in 0..200 {
            let value = sample(&mut rng, &spec);
            assert!(value.re() <= 5.0);
            assert!(value.im() <= 4.0);
        }
    }

    #[test]
    fn test_lower_bound_only_caps_the_imaginary_part() {
        let mut rng = FastRng::seeded(23);
        let spec = ComplexSpec::new(1, 1, 1, 1).with_start(bound("5.0", "4.0"));

        for _ in 0..200 {
            let value = sample(&mut rng, &spec);
            assert!(value.re() >= 5.0);
            assert!(value.im() <= 4.0);
        }
    }

    #[test]
    fn test_bound_check_draws_a_throwaway_sample() {
        // Pre-checks: real >= 1.0 draws 2.0, imaginary >= 1.0 draws 3.0.
        // Then the kept draw: real 4.5, imaginary 0.5 (imaginary <= 1.0).
        let mut rng = CountingRng::new(SequenceRng::from_digits("20304505"));
        let spec = ComplexSpec::new(1, 1, 1, 1).with_start(bound("1.0", "1.0"));

        let value = sample(&mut rng, &spec);

        assert_eq!(value.to_string(), "4.5+0.5i");
        assert_eq!(rng.draws(), 8);
    }

    #[test]
    fn test_non_positive_length_fails_before_drawing() {
        let spec = ComplexSpec::new(1, 1, 1, 0);

        let result = sample_complex(&mut PanickingRng, &spec, &SamplingLimits::default());

        assert_eq!(
            result,
            Err(GenerationError::WrongLength(WrongLengthError::InvalidLength { length: 0 }))
        );
    }

    #[test]
    fn test_any_component_above_the_length_ceiling_fails_before_drawing() {
        let limits = SamplingLimits::default().with_max_length(NonZeroUsize::new(8).unwrap());
        let spec = ComplexSpec::new(1, 1, 9, 1).with_start(bound("1.0", "1.0"));

        let result = sample_complex(&mut PanickingRng, &spec, &limits);

        assert_eq!(
            result,
            Err(GenerationError::WrongLength(WrongLengthError::LengthTooLarge {
                length: 9,
                max: 8
            }))
        );
    }

    #[test]
    fn test_bound_shape_mismatch_is_a_length_error() {
        let spec = ComplexSpec::new(1, 1, 2, 1).with_start(bound("1.0", "1.0"));
        let mut rng = FastRng::seeded(1);

        let result = sample_complex(&mut rng, &spec, &SamplingLimits::default());

        assert!(result.unwrap_err().is_wrong_length());
    }

    #[test]
    fn test_bounds_built_from_floats() {
        let mut rng = FastRng::seeded(5);
        let spec = ComplexSpec::new(2, 1, 2, 1)
            .with_start(ComplexBound::from_f64(10.5, 20.0).unwrap())
            .with_end(ComplexBound::from_f64(50.5, 60.0).unwrap());

        let value = sample(&mut rng, &spec);

        assert!((10.5..=50.5).contains(&value.re()));
        assert!((20.0..=60.0).contains(&value.im()));
    }
}
