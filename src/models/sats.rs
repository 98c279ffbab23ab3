//! Sats type for representing node amounts
//!
//! Wraps an exact decimal so fractional satoshi amounts (millisat fees show up
//! as e.g. `-0.123`) survive accumulation without floating-point drift.
//! Rounding happens only when an amount is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

/// Largest magnitude accepted from an export: the full bitcoin supply
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x5A07_4000, 0x0007_75F0, 0, false, 0);

/// A signed quantity of satoshis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sats(Decimal);

impl Sats {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Wrap an existing decimal
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Get the underlying decimal
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Round to two fractional digits, half away from zero
    ///
    /// A result of zero is always positive zero so it never renders as `-0.00`.
    pub fn rounded(&self) -> Decimal {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        }
    }

    /// Parse an amount as exported
    ///
    /// Accepts plain decimals ("-500", "12.345", "+3") and scientific notation
    /// ("1e-3"). Surrounding whitespace is ignored. Magnitudes above
    /// [`MAX_AMOUNT`] are rejected.
    pub fn parse(s: &str) -> Result<Self, SatsParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SatsParseError::Empty);
        }

        let s = s.strip_prefix('+').unwrap_or(s);

        let value = Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| SatsParseError::InvalidFormat(s.to_string()))?;

        if value.abs() > MAX_AMOUNT {
            return Err(SatsParseError::OutOfRange(s.to_string()));
        }
        Ok(Self(value))
    }

    /// Add two amounts, or `None` if the sum is not representable
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl Default for Sats {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Sats {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Sats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

// Parsed amounts are bounded by `MAX_AMOUNT`, so sums of any realistic number
// of rows stay far inside `Decimal`'s range.
impl Add for Sats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Sats {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Neg for Sats {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Sats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Sats::zero(), |acc, s| acc + s)
    }
}

impl<'a> std::iter::Sum<&'a Sats> for Sats {
    fn sum<I: Iterator<Item = &'a Sats>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatsParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for SatsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatsParseError::Empty => write!(f, "amount is empty"),
            SatsParseError::InvalidFormat(s) => write!(f, "invalid amount '{}'", s),
            SatsParseError::OutOfRange(s) => write!(f, "amount '{}' exceeds the bitcoin supply", s),
        }
    }
}

impl std::error::Error for SatsParseError {}
