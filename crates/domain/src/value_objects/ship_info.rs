//! ShipInfo value object - an immutable shipping destination
//!
//! Built from pre-validated newtypes, so the field-level checks of the
//! receiver name, address, and phone already happened before a `ShipInfo`
//! can exist. Destination changes on an order replace the whole value,
//! never a single field.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ReceiverAddress, ReceiverName, ReceiverTel};

/// Where an order ships to
///
/// Structural equality across all present fields: two destinations are
/// interchangeable exactly when every field matches, including whether a
/// phone number is present.
///
/// # Example
///
/// ```
/// use myshop_domain::value_objects::{ReceiverAddress, ReceiverName, ReceiverTel, ShipInfo};
///
/// let name = ReceiverName::new("Kim Minsu").unwrap();
/// let address = ReceiverAddress::new("123 Teheran-ro, Seoul").unwrap();
/// let ship_info = ShipInfo::new(name, address)
///     .with_tel(ReceiverTel::new("010-1234-5678").unwrap());
///
/// assert_eq!(ship_info.receiver_name().as_str(), "Kim Minsu");
/// assert!(ship_info.receiver_tel().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipInfo {
    receiver_name: ReceiverName,
    receiver_address: ReceiverAddress,
    receiver_tel: Option<ReceiverTel>,
}

impl ShipInfo {
    /// Create a destination without a phone number.
    pub fn new(receiver_name: ReceiverName, receiver_address: ReceiverAddress) -> Self {
        Self {
            receiver_name,
            receiver_address,
            receiver_tel: None,
        }
    }

    /// Attach a contact phone number.
    #[must_use]
    pub fn with_tel(mut self, receiver_tel: ReceiverTel) -> Self {
        self.receiver_tel = Some(receiver_tel);
        self
    }

    /// Returns the receiver's name.
    #[inline]
    pub fn receiver_name(&self) -> &ReceiverName {
        &self.receiver_name
    }

    /// Returns the shipping address.
    #[inline]
    pub fn receiver_address(&self) -> &ReceiverAddress {
        &self.receiver_address
    }

    /// Returns the contact phone number, if one was provided.
    #[inline]
    pub fn receiver_tel(&self) -> Option<&ReceiverTel> {
        self.receiver_tel.as_ref()
    }
}
