//! Validated string newtypes for the order domain
//!
//! These newtypes ensure that required strings are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (ProductName, ReceiverName)
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for a shipping address
const MAX_ADDRESS_LENGTH: usize = 500;

/// Maximum length for a phone number
const MAX_TEL_LENGTH: usize = 32;

// ============================================================================
// ProductName
// ============================================================================

/// A validated product name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Create a new validated product name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Product name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Product name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> String {
        name.0
    }
}

// ============================================================================
// ReceiverName
// ============================================================================

/// A validated receiver name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReceiverName(String);

impl ReceiverName {
    /// Create a new validated receiver name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Receiver name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Receiver name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiverName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ReceiverName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ReceiverName> for String {
    fn from(name: ReceiverName) -> String {
        name.0
    }
}

// ============================================================================
// ReceiverAddress
// ============================================================================

/// A validated shipping address (non-empty, <=500 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReceiverAddress(String);

impl ReceiverAddress {
    /// Create a new validated shipping address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The address is empty after trimming
    /// - The address exceeds 500 characters after trimming
    pub fn new(address: impl Into<String>) -> Result<Self, DomainError> {
        let address = address.into();
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Receiver address cannot be empty"));
        }
        if trimmed.len() > MAX_ADDRESS_LENGTH {
            return Err(DomainError::validation(format!(
                "Receiver address cannot exceed {} characters",
                MAX_ADDRESS_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiverAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ReceiverAddress {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ReceiverAddress> for String {
    fn from(address: ReceiverAddress) -> String {
        address.0
    }
}

// ============================================================================
// ReceiverTel
// ============================================================================

/// A validated phone number (non-empty, <=32 chars, trimmed)
///
/// No format check beyond non-emptiness: phone formats vary too much across
/// regions to validate here, and the boundary owns input normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReceiverTel(String);

impl ReceiverTel {
    /// Create a new validated phone number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The number is empty after trimming
    /// - The number exceeds 32 characters after trimming
    pub fn new(tel: impl Into<String>) -> Result<Self, DomainError> {
        let tel = tel.into();
        let trimmed = tel.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Receiver tel cannot be empty"));
        }
        if trimmed.len() > MAX_TEL_LENGTH {
            return Err(DomainError::validation(format!(
                "Receiver tel cannot exceed {} characters",
                MAX_TEL_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiverTel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ReceiverTel {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ReceiverTel> for String {
    fn from(tel: ReceiverTel) -> String {
        tel.0
    }
}

// ============================================================================
// Tests
// ============================================================================
