//! Server configuration read from the environment.

use std::num::{NonZeroU64, NonZeroUsize};

use rando_core::limits::SamplingLimits;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Retry and length ceilings applied to every generation request.
    pub limits: SamplingLimits,
}

/// Longest digit run a request may ask for unless configured otherwise.
pub const DEFAULT_MAX_LENGTH: usize = 10_000;

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `RANDO_MAX_ATTEMPTS` and `RANDO_MAX_LENGTH` from
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `RANDO_MAX_ATTEMPTS=0` disables the attempt ceiling entirely. The
    /// length ceiling is always on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`,
    /// `RANDO_MAX_ATTEMPTS` is not a non-negative integer, or
    /// `RANDO_MAX_LENGTH` is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let limits = match lookup("RANDO_MAX_ATTEMPTS") {
            Some(raw) => {
                let attempts: u64 = raw.parse().map_err(|e| {
                    AppError::Config(format!("RANDO_MAX_ATTEMPTS must be a non-negative integer: {e}"))
                })?;
                NonZeroU64::new(attempts)
                    .map_or_else(SamplingLimits::unbounded, SamplingLimits::with_max_attempts)
            }
            None => SamplingLimits::default(),
        };
        let max_length = match lookup("RANDO_MAX_LENGTH") {
            Some(raw) => raw.parse::<NonZeroUsize>().map_err(|e| {
                AppError::Config(format!("RANDO_MAX_LENGTH must be a positive integer: {e}"))
            })?,
            None => NonZeroUsize::new(DEFAULT_MAX_LENGTH).unwrap_or(NonZeroUsize::MIN),
        };
        let limits = limits.with_max_length(max_length);
        Ok(Self { host, port, limits })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.limits.max_attempts(),
            SamplingLimits::default().max_attempts()
        );
        assert_eq!(
            config.limits.max_length().map(NonZeroUsize::get),
            Some(DEFAULT_MAX_LENGTH)
        );
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("RANDO_MAX_ATTEMPTS", "500"),
            ("RANDO_MAX_LENGTH", "256"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.limits.max_attempts().map(NonZeroU64::get), Some(500));
        assert_eq!(config.limits.max_length().map(NonZeroUsize::get), Some(256));
    }

    #[test]
    fn test_zero_attempts_means_unbounded() {
        let config = config_from(&[("RANDO_MAX_ATTEMPTS", "0")]).unwrap();
        assert_eq!(config.limits.max_attempts(), None);
        assert!(config.limits.max_length().is_some());
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let result = config_from(&[("PORT", "not-a-port")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_attempts_is_a_config_error() {
        let result = config_from(&[("RANDO_MAX_ATTEMPTS", "-4")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_or_invalid_max_length_is_a_config_error() {
        for raw in ["0", "-1", "lots"] {
            let result = config_from(&[("RANDO_MAX_LENGTH", raw)]);
            assert!(matches!(result, Err(AppError::Config(_))), "accepted {raw}");
        }
    }
}
