//! Value objects - Immutable objects defined by their attributes

mod names;
mod order_line;
mod price;
mod quantity;
mod ship_info;

pub use names::{ProductName, ReceiverAddress, ReceiverName, ReceiverTel};
pub use order_line::{OrderLine, OrderLines};
pub use price::Price;
pub use quantity::Quantity;
pub use ship_info::ShipInfo;
