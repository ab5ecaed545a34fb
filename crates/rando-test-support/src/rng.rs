//! Test RNGs — deterministic `RandomnessSource` implementations for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use rando_core::rng::RandomnessSource;

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. When drawing digits, each value is the digit itself
/// (draws index into `0..=9`).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, index: 0 }
    }

    /// Build a sequence from a string of decimal digits, one draw per digit.
    ///
    /// # Panics
    ///
    /// Panics if `digits` contains anything other than ASCII digits.
    #[must_use]
    pub fn from_digits(digits: &str) -> Self {
        let values = digits
            .chars()
            .map(|c| u64::from(c.to_digit(10).expect("digit sequence must be 0-9")))
            .collect();
        Self::new(values)
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Returns `true` once every scripted value has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.values.len()
    }
}

impl RandomnessSource for SequenceRng {
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64 {
        let val = *self
            .values
            .get(self.index)
            .unwrap_or_else(|| panic!("SequenceRng exhausted after {} draws", self.index));
        assert!(
            (min..=max).contains(&val),
            "scripted value {val} outside requested range [{min}, {max}]"
        );
        self.index += 1;
        val
    }
}

/// An RNG that panics on every draw. Used to prove that validation fails
/// before any randomness is consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingRng;

impl RandomnessSource for PanickingRng {
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64 {
        panic!("randomness drawn unexpectedly (range [{min}, {max}])")
    }
}

/// Wraps another source and counts how many draws pass through it.
#[derive(Debug)]
pub struct CountingRng<R> {
    inner: R,
    draws: usize,
}

impl<R> CountingRng<R> {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl<R: RandomnessSource> RandomnessSource for CountingRng<R> {
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64 {
        self.draws += 1;
        self.inner.next_u64_range(min, max)
    }
}

/// A latch shared between a test and the [`GatedRng`]s it hands out.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    entered: Arc<AtomicBool>,
    released: Arc<AtomicBool>,
}

impl Gate {
    /// A closed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once some draw is waiting at the gate.
    #[must_use]
    pub fn entered(&self) -> bool {
        self.entered.load(Ordering::SeqCst)
    }

    /// Lets every waiting and future draw through.
    pub fn release(&self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Wraps another source and blocks the calling thread on every draw until
/// its [`Gate`] is released.
#[derive(Debug)]
pub struct GatedRng<R> {
    gate: Gate,
    inner: R,
}

impl<R> GatedRng<R> {
    /// Wrap `inner` behind `gate`.
    #[must_use]
    pub fn new(gate: Gate, inner: R) -> Self {
        Self { gate, inner }
    }
}

impl<R: RandomnessSource> RandomnessSource for GatedRng<R> {
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64 {
        self.gate.entered.store(true, Ordering::SeqCst);
        while !self.gate.released.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(1));
        }
        self.inner.next_u64_range(min, max)
    }
}
