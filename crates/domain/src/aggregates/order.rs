//! Order aggregate - the single entry point for order mutation
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: validated value objects arrive pre-checked
//! - **Valid by construction**: `new()` takes types that cannot be invalid
//! - **Events**: mutations return an [`OrderEvent`] describing what happened
//!
//! Every mutation is two-phase: check legality against the current status,
//! then replace the relevant field. A failed operation leaves the aggregate
//! untouched; there is no intermediate state to observe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::events::OrderEvent;
use crate::ids::OrderId;
use crate::status::{OrderStatus, StatusMachine};
use crate::value_objects::{OrderLines, Price, ShipInfo};

/// An order: lines, destination, lifecycle status
///
/// # Invariants
///
/// - `order_lines` is non-empty (enforced by `OrderLines`) and fixed at
///   construction; lines are never added or removed afterwards
/// - `total_price` is the snapshot of `order_lines.total()` taken at
///   construction
/// - `status` only moves along the [`OrderStatus`] transition table
/// - `ship_info` is replaceable only while the status still allows content
///   changes, and only wholesale
///
/// # Example
///
/// ```
/// use myshop_domain::aggregates::Order;
/// use myshop_domain::entities::{Product, ProductId};
/// use myshop_domain::status::OrderStatus;
/// use myshop_domain::value_objects::{
///     OrderLine, OrderLines, Price, ProductName, Quantity, ReceiverAddress, ReceiverName,
///     ShipInfo,
/// };
///
/// let ship_info = ShipInfo::new(
///     ReceiverName::new("Kim Minsu").unwrap(),
///     ReceiverAddress::new("123 Teheran-ro, Seoul").unwrap(),
/// );
/// let lines = OrderLines::new(vec![OrderLine::new(
///     Product::new(
///         ProductId::new("SKU-001").unwrap(),
///         ProductName::new("Mechanical Keyboard").unwrap(),
///         Price::of(1000).unwrap(),
///     ),
///     Quantity::of(2).unwrap(),
/// )])
/// .unwrap();
///
/// let mut order = Order::new(ship_info, lines);
/// assert_eq!(order.status(), OrderStatus::NotPaid);
/// assert_eq!(order.total_price(), Price::of(2000).unwrap());
///
/// order.pay(Price::of(2000).unwrap()).unwrap();
/// assert_eq!(order.status(), OrderStatus::Paid);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // Identity
    id: OrderId,

    // Contents
    ship_info: ShipInfo,
    order_lines: OrderLines,

    // Lifecycle
    status: OrderStatus,
    /// Snapshot of `order_lines.total()` taken at construction
    total_price: Price,

    // Timestamps
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new order awaiting payment.
    ///
    /// Both parameters are valid by construction, so this cannot fail: an
    /// absent destination or an empty line collection is unrepresentable.
    pub fn new(ship_info: ShipInfo, order_lines: OrderLines) -> Self {
        let now = Utc::now();
        let total_price = order_lines.total();
        Self {
            id: OrderId::new(),
            ship_info,
            order_lines,
            status: OrderStatus::initial(),
            total_price,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the order's unique identifier.
    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the current lifecycle status.
    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the order total snapshotted at construction.
    #[inline]
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// Returns the current shipping destination.
    #[inline]
    pub fn ship_info(&self) -> &ShipInfo {
        &self.ship_info
    }

    /// Returns the order lines, fixed at construction.
    #[inline]
    pub fn order_lines(&self) -> &OrderLines {
        &self.order_lines
    }

    /// When the order was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the order last changed.
    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Accept payment and move to `Paid`.
    ///
    /// The tendered amount must cover the order total; overpayment is the
    /// caller's prerogative.
    ///
    /// # Errors
    ///
    /// - `DomainError::InsufficientPayment` if `paid` is less than the total;
    ///   the status is left unchanged
    /// - `DomainError::InvalidStatusTransition` if the order is not awaiting
    ///   payment
    pub fn pay(&mut self, paid: Price) -> Result<OrderEvent, DomainError> {
        if paid < self.total_price {
            return Err(DomainError::insufficient_payment(
                paid.amount(),
                self.total_price.amount(),
            ));
        }
        self.transition_to(OrderStatus::Paid)?;
        Ok(OrderEvent::Paid {
            order_id: self.id,
            amount: paid,
        })
    }

    /// Hand the order to the carrier and move to `Shipping`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` unless the order is
    /// `Paid`.
    pub fn ship(&mut self) -> Result<OrderEvent, DomainError> {
        self.transition_to(OrderStatus::Shipping)?;
        Ok(OrderEvent::Shipped { order_id: self.id })
    }

    /// Record delivery and move to the terminal `DeliveryCompleted`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` unless the order is
    /// `Shipping`.
    pub fn complete_delivery(&mut self) -> Result<OrderEvent, DomainError> {
        self.transition_to(OrderStatus::DeliveryCompleted)?;
        Ok(OrderEvent::DeliveryCompleted { order_id: self.id })
    }

    /// Cancel the order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` once the order has
    /// shipped, been delivered, or is already canceled.
    pub fn cancel(&mut self) -> Result<OrderEvent, DomainError> {
        self.transition_to(OrderStatus::Canceled)?;
        Ok(OrderEvent::Canceled { order_id: self.id })
    }

    /// Replace the shipping destination wholesale.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` once the order is at
    /// or past shipping; the previous destination is kept.
    pub fn change_ship_info(&mut self, ship_info: ShipInfo) -> Result<OrderEvent, DomainError> {
        if !self.status.allows_content_changes() {
            return Err(DomainError::invalid_status_transition(format!(
                "cannot change ship info while order is {}",
                self.status
            )));
        }
        self.ship_info = ship_info;
        self.touch();
        Ok(OrderEvent::ShipInfoChanged { order_id: self.id })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Single checked path for every status change.
    fn transition_to(&mut self, target: OrderStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::invalid_status_transition(format!(
                "cannot change order status from {} to {}",
                self.status, target
            )));
        }
        self.status = target;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
