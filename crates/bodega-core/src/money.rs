//! # Money
//!
//! Integer-cents monetary values and the even-split operation.
//!
//! ## No Floats, Ever
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  What goes wrong with f64 prices:                                       │
//! │                                                                         │
//! │      0.1 + 0.2 == 0.30000000000000004                                   │
//! │                                                                         │
//! │  What goes wrong with bare integer division:                            │
//! │                                                                         │
//! │      $10.00 across 3 people = $3.33 each                                │
//! │      3 x $3.33 = $9.99            ← a cent vanished                     │
//! │                                                                         │
//! │  What this module does instead:                                         │
//! │                                                                         │
//! │      Money(1000).split_even(3)                                          │
//! │        => share $3.33, remainder $0.01                                  │
//! │      3 x 333 + 1 = 1000           ← every cent accounted for            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bodega_core::money::Money;
//!
//! let pot = Money::from_cents(1301);
//! let split = pot.split_even(4)?;
//! assert_eq!(split.share.cents(), 325);
//! assert_eq!(split.remainder.cents(), 1);
//! # Ok::<(), bodega_core::error::ValidationError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;

/// A monetary amount counted in cents.
///
/// Signed so that differences and corrections are representable; the
/// shelf itself only ever stores positive prices (see `validate_price`).
/// Arithmetic stays in `i64` end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

/// Outcome of dividing an amount evenly.
///
/// `share * shares + remainder` reconstructs the amount that was split.
/// The remainder's magnitude is always smaller than the share count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneySplit {
    /// What each share receives
    pub share: Money,

    /// The cents that would not divide
    pub remainder: Money,
}

impl Money {
    /// Wraps a cent count.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let coffee = Money::from_cents(1250);
    /// assert_eq!(coffee.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Builds an amount from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign; the
    /// minor unit still counts away from zero.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(12, 50).cents(), 1250);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// The raw cent count.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-dollar portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Cent portion as a magnitude from 0 to 99, for display.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The magnitude of this amount.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Divides this amount evenly across `shares`, surfacing the cents
    /// that would not divide instead of dropping them.
    ///
    /// A share count of zero or less is rejected with `NotPositive`;
    /// there is no sentinel value a caller could forget to check.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let split = Money::from_cents(1000).split_even(3)?;
    /// assert_eq!(split.share.cents(), 333);
    /// assert_eq!(split.remainder.cents(), 1);
    ///
    /// assert!(Money::from_cents(1000).split_even(0).is_err());
    /// # Ok::<(), bodega_core::error::ValidationError>(())
    /// ```
    pub fn split_even(&self, shares: i64) -> Result<MoneySplit, ValidationError> {
        if shares <= 0 {
            return Err(ValidationError::NotPositive {
                field: "shares".to_string(),
            });
        }

        let share = self.0 / shares;

        Ok(MoneySplit {
            share: Money(share),
            remainder: Money(self.0 - share * shares),
        })
    }
}

/// Renders as `$12.50` / `-$0.05`.
///
/// Development display only; prompt output goes through the console
/// configuration so symbol and decimals stay configurable.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Scales an amount by a count, as in `share * shares`.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

/// Sums an iterator of amounts, as in shelf totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}
