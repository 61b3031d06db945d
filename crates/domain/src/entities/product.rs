//! Product entity - an immutable product reference with string identity
//!
//! Products carry identity (a SKU-style id), so equality and hashing go by
//! id alone: two snapshots of the same product compare equal even if the
//! name or unit price differs between them.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Price, ProductName};

/// A validated product identifier (non-empty, trimmed)
///
/// Products are identified by externally-assigned SKU strings, not UUIDs,
/// so this lives apart from the UUID id newtypes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Create a new validated product id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Product id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> String {
        id.0
    }
}

/// An immutable product reference: identity, display name, unit price
///
/// # Example
///
/// ```
/// use myshop_domain::entities::{Product, ProductId};
/// use myshop_domain::value_objects::{Price, ProductName};
///
/// let product = Product::new(
///     ProductId::new("SKU-001").unwrap(),
///     ProductName::new("Mechanical Keyboard").unwrap(),
///     Price::of(1000).unwrap(),
/// );
///
/// assert_eq!(product.unit_price(), Price::of(1000).unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    unit_price: Price,
}

impl Product {
    /// Create a product from pre-validated parts.
    pub fn new(id: ProductId, name: ProductName, unit_price: Price) -> Self {
        Self {
            id,
            name,
            unit_price,
        }
    }

    /// Returns the product's identity.
    #[inline]
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the product's display name.
    #[inline]
    pub fn name(&self) -> &ProductName {
        &self.name
    }

    /// Returns the price of a single unit.
    #[inline]
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }
}

// Identity equality: products compare by id only
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, unit_price: i64) -> Product {
        Product::new(
            ProductId::new(id).unwrap(),
            ProductName::new(name).unwrap(),
            Price::of(unit_price).unwrap(),
        )
    }

    #[test]
    fn empty_id_rejected() {
        let result = ProductId::new("  ");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
    }

    #[test]
    fn id_is_trimmed() {
        let id = ProductId::new(" SKU-001 ").unwrap();
        assert_eq!(id.as_str(), "SKU-001");
    }

    #[test]
    fn accessors_return_fields() {
        let p = product("SKU-001", "Mechanical Keyboard", 1000);
        assert_eq!(p.id().as_str(), "SKU-001");
        assert_eq!(p.name().as_str(), "Mechanical Keyboard");
        assert_eq!(p.unit_price(), Price::of(1000).unwrap());
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = product("SKU-001", "Mechanical Keyboard", 1000);
        let b = product("SKU-001", "Renamed Keyboard", 1200);
        let c = product("SKU-002", "Mechanical Keyboard", 1000);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_follows_id() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(product("SKU-001", "Mechanical Keyboard", 1000));
        assert!(set.contains(&product("SKU-001", "Renamed Keyboard", 1200)));
        assert!(!set.contains(&product("SKU-002", "Mechanical Keyboard", 1000)));
    }
}
