//! Randomness source abstraction.
//!
//! Generators never reach for a global RNG. A source is injected, so the same
//! sampling code runs against a fast non-secure generator, a cryptographically
//! secure one, or a scripted source in tests.

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};

/// Abstraction over uniform random draws.
pub trait RandomnessSource: Send {
    /// Generate a random `u64` in the range `[min, max]` inclusive.
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64;
}

/// Returns one element of `items` chosen uniformly at random, or `None` if
/// `items` is empty.
pub fn choose<'a, T, R>(source: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: RandomnessSource + ?Sized,
{
    let last = u64::try_from(items.len().checked_sub(1)?).ok()?;
    let index = usize::try_from(source.next_u64_range(0, last)).ok()?;
    items.get(index)
}

/// Fast, non-secure source. Reproducible when seeded.
#[derive(Debug, Clone)]
pub struct FastRng(SmallRng);

impl FastRng {
    /// Create a source whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Create a source seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl RandomnessSource for FastRng {
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64 {
        self.0.random_range(min..=max)
    }
}

/// Cryptographically secure source backed by an OS-seeded CSPRNG.
#[derive(Debug, Clone)]
pub struct SecureRng(StdRng);

impl SecureRng {
    /// Create a secure source seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl RandomnessSource for SecureRng {
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64 {
        self.0.random_range(min..=max)
    }
}
