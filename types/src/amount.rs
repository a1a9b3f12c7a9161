//! Monetary amount type in base units.
//!
//! Amounts are represented as fixed-point integers (i64) to avoid
//! floating-point errors. The smallest unit is 1 base unit (one
//! hundred-millionth of a whole coin).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of base units in one whole coin.
pub const COIN: i64 = 100_000_000;

/// A monetary amount in base units.
///
/// Internally stored as a signed integer so that intermediate arithmetic
/// (stepping below zero, overflowing sums) is representable, but a valid
/// amount is always in `[0, MAX_MONEY]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// The maximum representable supply: 21 million whole coins.
    pub const MAX_MONEY: Self = Self(21_000_000 * COIN);

    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Whether this amount lies in the valid monetary range.
    pub fn in_range(&self) -> bool {
        self.0 >= 0 && self.0 <= Self::MAX_MONEY.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        self.0.checked_mul(factor).map(Self)
    }

    /// Clamp into the valid monetary range `[0, MAX_MONEY]`.
    pub fn clamp_to_money(self) -> Self {
        Self(self.0.clamp(0, Self::MAX_MONEY.0))
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} base units", self.0)
    }
}
