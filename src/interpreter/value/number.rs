use std::cmp::Ordering;

use crate::util::num::{format_real, i64_to_f64};

/// A numeric runtime value.
///
/// Integer literals produce [`Number::Integer`]; literals with a decimal point
/// produce [`Number::Real`]. Mixed arithmetic widens to real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

impl Number {
    /// Returns the value as an `f64`, widening integers.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i64_to_f64(i),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for integer zero and for real `0.0`/`-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Compares two numbers numerically, across integer and real.
    ///
    /// Two integers compare exactly; any other pairing compares as `f64`.
    ///
    /// ## Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use rlite::interpreter::value::number::Number;
    ///
    /// let a = Number::Integer(2);
    /// let b = Number::Real(2.5);
    /// assert_eq!(a.compare(b), Some(Ordering::Less));
    /// assert_eq!(Number::Integer(3).compare(Number::Real(3.0)), Some(Ordering::Equal));
    /// ```
    #[must_use]
    pub fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for Number {
    fn from(value: bool) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => f.write_str(&format_real(*r)),
        }
    }
}
