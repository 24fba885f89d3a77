//! Exact decimal money type.
//!
//! Uses `rust_decimal` internally so sums and differences of order amounts
//! carry no floating-point error. Values keep full precision through every
//! calculation and are only rounded to 2 decimal places when displayed.
//! Arithmetic is checked: a result outside the `Decimal` range yields `None`.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A monetary amount kept at full precision.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use order_analytics::Amount;
///
/// let amount = Amount::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Number of decimal places used for display.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Wraps a `Decimal` without altering its scale.
    pub const fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns the unrounded value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Adds `rhs`, returning `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Subtracts `rhs`, returning `None` on overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Divides by a record count, returning `None` if `count` is zero.
    pub fn checked_div_count(self, count: usize) -> Option<Self> {
        self.0.checked_div(Decimal::from(count as u64)).map(Amount)
    }

    /// Returns the value rounded half-to-even to [`Self::DISPLAY_SCALE`] places.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(Self::DISPLAY_SCALE);
        rounded
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
