//! Domain events returned from Order mutations
//!
//! Every successful aggregate mutation reports what happened as a returned
//! enum value. Adapters decide whether to persist, publish, or drop them;
//! the domain only states facts.

use serde::{Deserialize, Serialize};

use crate::ids::OrderId;
use crate::value_objects::Price;

/// What happened to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderEvent {
    /// Payment accepted; the tendered amount may exceed the total
    Paid { order_id: OrderId, amount: Price },
    /// Handed to the carrier
    Shipped { order_id: OrderId },
    /// Delivered to the receiver
    DeliveryCompleted { order_id: OrderId },
    /// Canceled before shipping
    Canceled { order_id: OrderId },
    /// Destination replaced wholesale
    ShipInfoChanged { order_id: OrderId },
}

impl OrderEvent {
    /// The order this event belongs to.
    pub fn order_id(&self) -> OrderId {
        match self {
            Self::Paid { order_id, .. }
            | Self::Shipped { order_id }
            | Self::DeliveryCompleted { order_id }
            | Self::Canceled { order_id }
            | Self::ShipInfoChanged { order_id } => *order_id,
        }
    }
}
