//! Type-safe money representation using decimal arithmetic.
//!
//! Prices are stored as `rust_decimal::Decimal`, never as floats, so cart
//! totals are exact. The storefront currently sells in a single currency, so
//! `Money` carries no currency code.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a money value from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a money value from an amount in cents.
    ///
    /// ```rust
    /// # use roastline_core::Money;
    /// assert_eq!(Money::from_cents(599).to_string(), "$5.99");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    /// Format for display with a currency symbol and two decimal places,
    /// e.g. `$47.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    /// Multiply a unit price by a quantity.
    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Money::from_cents(4_700).to_string(), "$47.00");
        assert_eq!(Money::from_cents(599).to_string(), "$5.99");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_from_cents_exact() {
        // 0.1 + 0.2 style drift is impossible with Decimal
        let sum = Money::from_cents(10) + Money::from_cents(20);
        assert_eq!(sum, Money::from_cents(30));
    }

    #[test]
    fn test_mul_by_quantity() {
        assert_eq!(Money::from_cents(4_700) * 2, Money::from_cents(9_400));
        assert_eq!(Money::from_cents(4_700) * 0, Money::zero());
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_cents(5_000) > Money::from_cents(4_999));
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Money::from_cents(3_865);
        let json = serde_json::to_string(&price).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
