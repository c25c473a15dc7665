#![forbid(unsafe_code)]

//! Lenient millisecond values for delay and duration options.
//!
//! Hosts hand these over as numbers or as attribute text. Text is read the
//! way an HTML attribute would be: optional leading whitespace and sign, then
//! the longest run of decimal digits (`"150ms"` is 150). Anything without a
//! leading digit run is 0. Negative values clamp to 0 and oversized values
//! saturate. Parsing never fails.

use std::fmt;

use core::time::Duration;

/// A non-negative millisecond count, where 0 means "none".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "MillisRepr", into = "u64"))]
pub struct Millis(u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Wrap a millisecond count.
    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Parse attribute text leniently. Never fails.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let s = text.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let mut value: u64 = 0;
        let mut seen = false;
        for b in digits.bytes().take_while(u8::is_ascii_digit) {
            seen = true;
            value = value.saturating_mul(10).saturating_add(u64::from(b - b'0'));
        }
        if !seen || negative {
            return Self::ZERO;
        }
        Self(value)
    }

    /// Clamp a signed count; negatives become 0.
    #[must_use]
    pub fn from_signed(ms: i64) -> Self {
        Self(u64::try_from(ms).unwrap_or(0))
    }

    /// Truncate a float count; NaN, infinities, and negatives become 0.
    #[must_use]
    pub fn from_float(ms: f64) -> Self {
        if ms.is_finite() && ms > 0.0 {
            // Saturating float-to-int cast.
            Self(ms.trunc() as u64)
        } else {
            Self::ZERO
        }
    }

    /// Raw millisecond count.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is zero ("no delay" / "no auto-hide").
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// As a [`Duration`].
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl From<u64> for Millis {
    fn from(ms: u64) -> Self {
        Self(ms)
    }
}

impl From<&str> for Millis {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<Millis> for u64 {
    fn from(ms: Millis) -> Self {
        ms.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Wire forms accepted for a millisecond option.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum MillisRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<MillisRepr> for Millis {
    fn from(repr: MillisRepr) -> Self {
        match repr {
            MillisRepr::Int(ms) => Self::from_signed(ms),
            MillisRepr::Float(ms) => Self::from_float(ms),
            MillisRepr::Text(text) => Self::parse(&text),
        }
    }
}
