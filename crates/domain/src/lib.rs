//! Order domain: value objects, status machines, and the Order aggregate.
//!
//! This crate is the innermost layer - pure, synchronous, no I/O. External
//! callers (repositories, controllers) construct value objects from their
//! input, invoke `Order` operations, and persist or render the result; none
//! of that happens here.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod status;
pub mod value_objects;

pub use aggregates::Order;
pub use entities::{Product, ProductId};
pub use error::DomainError;
pub use events::OrderEvent;
pub use ids::OrderId;
pub use status::{OrderStatus, ReleaseStatus, StatusMachine};
pub use value_objects::{
    OrderLine, OrderLines, Price, ProductName, Quantity, ReceiverAddress, ReceiverName,
    ReceiverTel, ShipInfo,
};
