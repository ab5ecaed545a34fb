//! Shared application state.

use std::sync::Arc;

use rando_core::error::GenerationError;
use rando_core::limits::SamplingLimits;
use rando_core::rng::{FastRng, RandomnessSource, SecureRng};
use tracing::{Span, error};

use crate::error::ApiError;

/// Builds a fresh randomness source for one request.
pub type RngFactory = Arc<dyn Fn() -> Box<dyn RandomnessSource> + Send + Sync>;

/// Wraps a constructor of some concrete source as an [`RngFactory`].
#[must_use]
pub fn rng_factory<R, F>(make: F) -> RngFactory
where
    R: RandomnessSource + 'static,
    F: Fn() -> R + Send + Sync + 'static,
{
    Arc::new(move || -> Box<dyn RandomnessSource> { Box::new(make()) })
}

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fast, non-secure sources.
    pub fast_rng: RngFactory,
    /// Cryptographically secure sources.
    pub secure_rng: RngFactory,
    /// Retry and length ceilings applied to every request.
    pub limits: SamplingLimits,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(fast_rng: RngFactory, secure_rng: RngFactory, limits: SamplingLimits) -> Self {
        Self {
            fast_rng,
            secure_rng,
            limits,
        }
    }

    /// State that seeds a fast or secure source from the OS per request.
    #[must_use]
    pub fn from_os_rng(limits: SamplingLimits) -> Self {
        Self::new(
            rng_factory(FastRng::from_os_rng),
            rng_factory(SecureRng::from_os_rng),
            limits,
        )
    }

    /// Runs `sample` on the blocking pool against a source of its own, so a
    /// long rejection loop never stalls the async workers or other requests.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if the blocking task fails to complete, or
    /// the sampler's own error.
    pub async fn generate<T, F>(&self, secure: bool, sample: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn RandomnessSource, &SamplingLimits) -> Result<T, GenerationError>
            + Send
            + 'static,
    {
        let make_source = if secure {
            Arc::clone(&self.secure_rng)
        } else {
            Arc::clone(&self.fast_rng)
        };
        let limits = self.limits;
        let span = Span::current();

        let drawn = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            let mut source = make_source();
            sample(&mut *source, &limits)
        })
        .await
        .map_err(|e| {
            error!(error = %e, "generation task failed");
            ApiError::Internal(format!("generation task failed: {e}"))
        })?;

        Ok(drawn?)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
