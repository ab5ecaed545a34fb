//! Generated value types.
//!
//! Values keep their digit strings so the exact digit shape stays observable;
//! numeric views are derived on demand.

use std::cmp::Ordering;
use std::fmt;

/// The decimal digits a generator may draw, in order.
pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// A generated non-negative integer in digit-string form.
///
/// The string has exactly the requested number of digits. It only begins with
/// `0` when leading zeros were permitted or the length is one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    pub(crate) fn new(digits: String) -> Self {
        Self(digits)
    }

    /// The digits as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning its digits.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The numeric value, or `None` if it does not fit in a `u64`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The numeric value, or `None` if it does not fit in a `u128`.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        self.0.parse().ok()
    }

    /// Compares the numeric value against an integer bound without parsing
    /// the digits, so arbitrarily long values compare correctly.
    pub(crate) fn cmp_bound(&self, bound: i128) -> Ordering {
        if bound < 0 {
            return Ordering::Greater;
        }
        let bound = bound.to_string();
        let own = self.0.trim_start_matches('0');
        own.len()
            .cmp(&bound.trim_start_matches('0').len())
            .then_with(|| own.cmp(bound.trim_start_matches('0')))
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DigitString> for String {
    fn from(value: DigitString) -> Self {
        value.0
    }
}

/// A generated float with a fixed number of integer and fractional digits.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDecimal {
    integer: DigitString,
    fraction: DigitString,
    value: f64,
}

impl FixedDecimal {
    pub(crate) fn new(integer: DigitString, fraction: DigitString) -> Self {
        let value = parse_decimal(integer.as_str(), fraction.as_str());
        Self {
            integer,
            fraction,
            value,
        }
    }

    /// Digits before the decimal point.
    #[must_use]
    pub fn integer_digits(&self) -> &str {
        self.integer.as_str()
    }

    /// Digits after the decimal point, trailing zeros included.
    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        self.fraction.as_str()
    }

    /// The value as an `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.integer, self.fraction)
    }
}

/// A generated complex number; each component is a [`FixedDecimal`].
#[derive(Debug, Clone, PartialEq)]
pub struct Complex {
    real: FixedDecimal,
    imag: FixedDecimal,
}

impl Complex {
    pub(crate) fn new(real: FixedDecimal, imag: FixedDecimal) -> Self {
        Self { real, imag }
    }

    /// Real component.
    #[must_use]
    pub fn re(&self) -> f64 {
        self.real.to_f64()
    }

    /// Imaginary component.
    #[must_use]
    pub fn im(&self) -> f64 {
        self.imag.to_f64()
    }

    /// Real component with its digit shape.
    #[must_use]
    pub fn real(&self) -> &FixedDecimal {
        &self.real
    }

    /// Imaginary component with its digit shape.
    #[must_use]
    pub fn imag(&self) -> &FixedDecimal {
        &self.imag
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}i", self.real, self.imag)
    }
}

/// Parses `<integer>.<fraction>` digit runs. Plain digit runs always parse;
/// overly long integer parts saturate to infinity.
fn parse_decimal(integer: &str, fraction: &str) -> f64 {
    format!("{integer}.{fraction}")
        .parse()
        .unwrap_or(f64::INFINITY)
}
