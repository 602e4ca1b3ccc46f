//! Percentage and rounding
//!
//! The scorer reports an integer percentage. The mean of slot credits can
//! land on a `.5` boundary (e.g. 50 credit over 4 slots is 12.5), so the
//! rounding mode is explicit.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An integer percentage in `[0, 100]`
///
/// Only built through [`Percentage::new`] and [`Percentage::from_mean`], never deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent
    pub const ZERO: Self = Self(0);

    /// One hundred percent
    pub const FULL: Self = Self(100);

    /// Create a percentage, clamping to 100
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Mean of `total` over `count`, rounded with `rounding`
    ///
    /// Returns zero when `count` is zero.
    #[must_use]
    pub fn from_mean(total: u64, count: u64, rounding: Rounding) -> Self {
        if count == 0 {
            return Self::ZERO;
        }
        let rounded = rounding.divide(total, count).min(100);
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    /// The raw value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

/// How a mean falling exactly on `.5` is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// 12.5 becomes 13, 62.5 becomes 63
    #[default]
    HalfAwayFromZero,
    /// 12.5 becomes 12, 62.5 becomes 62, 37.5 becomes 38
    HalfEven,
}

impl Rounding {
    /// Divide `numerator` by `denominator` and round to the nearest integer
    ///
    /// Operates on non-negative integers only, so no precision is lost.
    /// A zero `denominator` yields zero.
    #[must_use]
    pub const fn divide(self, numerator: u64, denominator: u64) -> u64 {
        if denominator == 0 {
            return 0;
        }
        let quotient = numerator / denominator;
        let remainder = numerator % denominator;
        // Compare 2r with d instead of r with d/2 to stay exact for odd d
        let twice = remainder * 2;

        if twice > denominator {
            quotient + 1
        } else if twice < denominator {
            quotient
        } else {
            match self {
                Self::HalfAwayFromZero => quotient + 1,
                Self::HalfEven => quotient + quotient % 2,
            }
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfAwayFromZero => write!(f, "half-away-from-zero"),
            Self::HalfEven => write!(f, "half-even"),
        }
    }
}

/// Error returned when a rounding mode name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rounding mode: {0}. Use: half-away-from-zero, half-even")]
pub struct ParseRoundingError(String);

impl std::str::FromStr for Rounding {
    type Err = ParseRoundingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half-away-from-zero" | "half-up" => Ok(Self::HalfAwayFromZero),
            "half-even" | "bankers" => Ok(Self::HalfEven),
            _ => Err(ParseRoundingError(s.to_string())),
        }
    }
}
