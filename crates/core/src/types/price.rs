//! Monetary amounts backed by decimal arithmetic.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's display currency.
///
/// Wraps [`rust_decimal::Decimal`] so totals coming off the wire keep
/// their exact decimal value instead of picking up binary floating-point
/// noise. The cart API serves a single currency; multi-currency handling
/// is out of scope.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero in the display currency.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with two decimal places (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|price| price.0).sum())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::new(s.parse().unwrap())
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(price("10").display(), "$10.00");
        assert_eq!(price("19.99").display(), "$19.99");
        assert_eq!(price("0.5").display(), "$0.50");
    }

    #[test]
    fn test_sum() {
        let total: Price = [price("10.00"), price("15.00")].into_iter().sum();
        assert_eq!(total, price("25.00"));
    }

    #[test]
    fn test_deserialize_from_number() {
        // The API serializes totals as plain JSON numbers.
        let p: Price = serde_json::from_str("10.0").unwrap();
        assert_eq!(p, price("10.00"));
    }

    #[test]
    fn test_zero_is_default() {
        assert_eq!(Price::default(), Price::ZERO);
    }
}
