//! Money type for representing prices and totals.
//!
//! Amounts are stored in cents to avoid floating-point precision issues in
//! monetary calculations. The demo catalog is single-currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrine_commerce::money::Money;
    /// assert_eq!(Money::from_decimal(49.99), Money::new(4999));
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Get the amount in cents.
    pub fn cents(self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub fn is_zero(self) -> bool {
        self.cents == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(self) -> bool {
        self.cents > 0
    }

    /// Convert to a decimal value for display math.
    pub fn to_decimal(self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Try to add another amount, returning `None` on overflow.
    pub fn try_add(self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::new)
    }

    /// Try to multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(self, factor: i64) -> Option<Money> {
        self.cents.checked_mul(factor).map(Money::new)
    }

    /// Try to sum an iterator of amounts, returning `None` on overflow.
    pub fn try_sum(mut iter: impl Iterator<Item = Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), Money::try_add)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.cents + other.cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).cents(), 4999);
        assert_eq!(Money::from_decimal(200.0).cents(), 20000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(4999).to_string(), "$49.99");
        assert_eq!(Money::new(50).to_string(), "$0.50");
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::new(10000);
        assert_eq!(price.try_multiply(3), Some(Money::new(30000)));
        assert_eq!(price.try_add(Money::new(500)), Some(Money::new(10500)));
        assert_eq!(Money::new(i64::MAX).try_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MAX).try_multiply(2), None);
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::new(100), Money::new(250), Money::new(50)];
        assert_eq!(
            Money::try_sum(amounts.into_iter()),
            Some(Money::new(400))
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Money::new(50) < Money::new(500));
        assert!(Money::new(500) < Money::new(1500));
    }
}
