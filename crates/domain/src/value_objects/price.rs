//! Price value object - a non-negative amount of money
//!
//! The amount is stored as a signed 64-bit integer (smallest currency unit)
//! but is never negative: construction validates, and serde goes through the
//! same fallible conversion, so an invalid `Price` cannot be observed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A non-negative amount of money
///
/// Comparison uses the derived `Ord` - `a.cmp(&b)` is the three-way
/// comparison, and `<`/`>=` read naturally at call sites like `pay`.
///
/// # Example
///
/// ```
/// use myshop_domain::value_objects::Price;
///
/// let price = Price::of(1000).unwrap();
/// assert_eq!(price.add(Price::of(500).unwrap()), Price::of(1500).unwrap());
/// assert_eq!(price.multiply(10), Price::of(10000).unwrap());
/// assert!(Price::of(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    /// The zero price, used as the seed when folding line totals.
    pub const ZERO: Price = Price(0);

    /// Create a price from an amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is negative.
    pub fn of(amount: i64) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::validation(format!(
                "price cannot be less than 0, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    /// Returns the raw amount.
    #[inline]
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Sum of two prices. Cannot go negative, so no validation is re-run.
    #[must_use]
    pub fn add(self, other: Price) -> Price {
        Price(self.0 + other.0)
    }

    /// Price scaled by a count.
    ///
    /// The factor is unsigned, so the non-negative invariant holds by type
    /// rather than by a runtime check.
    #[must_use]
    pub fn multiply(self, factor: u32) -> Price {
        Price(self.0 * i64::from(factor))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Price {
    type Error = DomainError;

    fn try_from(amount: i64) -> Result<Self, Self::Error> {
        Self::of(amount)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> i64 {
        price.0
    }
}
