//! Route modules organized by generated value kind.

pub mod complex;
pub mod floats;
pub mod health;
pub mod integers;

use rando_numeric::domain::length_range::{DEFAULT_MAXLEN, DEFAULT_MINLEN, LengthRange};
use serde::Deserialize;

/// Request body shared by the random-length routes.
#[derive(Debug, Deserialize)]
pub struct LengthRangeRequest {
    /// Smallest length that may be drawn.
    #[serde(default = "default_minlen")]
    pub minlen: i64,
    /// Largest length that may be drawn.
    #[serde(default = "default_maxlen")]
    pub maxlen: i64,
    /// Draw from the cryptographically secure source.
    #[serde(default)]
    pub secure: bool,
}

impl LengthRangeRequest {
    /// The requested range.
    #[must_use]
    pub fn range(&self) -> LengthRange {
        LengthRange::new(self.minlen, self.maxlen)
    }
}

fn default_minlen() -> i64 {
    DEFAULT_MINLEN
}

fn default_maxlen() -> i64 {
    DEFAULT_MAXLEN
}
