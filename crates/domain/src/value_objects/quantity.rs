//! Quantity value object - a positive item count
//!
//! Zero is rejected: an order line of zero items has no meaning in this
//! domain. Stock-keeping counts that may legitimately hit zero belong in a
//! different value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A positive item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity from a count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is less than 1 or does
    /// not fit in 32 bits.
    pub fn of(value: i64) -> Result<Self, DomainError> {
        if value < 1 {
            return Err(DomainError::validation(format!(
                "quantity must be at least 1, got {}",
                value
            )));
        }
        let value = u32::try_from(value).map_err(|_| {
            DomainError::validation(format!("quantity {} is too large", value))
        })?;
        Ok(Self(value))
    }

    /// Returns the raw count.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Sum of two quantities. Both operands are at least 1, so the result is too.
    #[must_use]
    pub fn add(self, other: Quantity) -> Quantity {
        Quantity(self.0 + other.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> i64 {
        i64::from(quantity.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_count_accepted() {
        let quantity = Quantity::of(2).unwrap();
        assert_eq!(quantity.value(), 2);
    }

    #[test]
    fn zero_rejected() {
        let result = Quantity::of(0);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn negative_rejected() {
        assert!(Quantity::of(-1).is_err());
    }

    #[test]
    fn oversized_count_rejected() {
        assert!(Quantity::of(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn equal_counts_are_equal() {
        assert_eq!(Quantity::of(2).unwrap(), Quantity::of(2).unwrap());
    }

    #[test]
    fn add_sums_counts() {
        let sum = Quantity::of(1).unwrap().add(Quantity::of(2).unwrap());
        assert_eq!(sum.value(), 3);
    }

    #[test]
    fn deserialize_zero_rejected() {
        let result: Result<Quantity, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
