//! Order lifecycle status machines
//!
//! Two configurations of one abstraction: the five-state payment/shipping
//! lifecycle used by [`crate::aggregates::Order`], and the reduced
//! ready/released lifecycle used where payment is out of the picture. Both
//! answer the same two questions - "may I move to that state?" and "may the
//! order's contents still change?" - through the [`StatusMachine`] trait, so
//! callers and tests can parametrize over either machine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A finite order-lifecycle machine: states plus a transition predicate
pub trait StatusMachine: Copy + Eq + fmt::Display + 'static {
    /// The state a fresh order starts in.
    fn initial() -> Self;

    /// Whether moving from this state to `target` is permitted.
    fn can_transition_to(self, target: Self) -> bool;

    /// Whether the order's contents (destination, etc.) may still change.
    fn allows_content_changes(self) -> bool;

    /// Every state of the machine.
    fn all() -> &'static [Self];

    /// A state with no legal exit.
    fn is_terminal(self) -> bool {
        Self::all()
            .iter()
            .all(|&target| !self.can_transition_to(target))
    }
}

// ============================================================================
// OrderStatus - the full payment/shipping lifecycle
// ============================================================================

/// Lifecycle of a paid-and-shipped order
///
/// ```text
/// NotPaid --> Paid --> Shipping --> DeliveryCompleted
///    \          \
///     +-------- Canceled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    /// Order placed, payment outstanding
    NotPaid,
    /// Payment received
    Paid,
    /// Handed to the carrier
    Shipping,
    /// Delivered to the receiver
    DeliveryCompleted,
    /// Canceled before shipping
    Canceled,
}

impl OrderStatus {
    /// True once the order is at or past the shipping sequence point.
    ///
    /// Gates destination changes independently of the transition table:
    /// a canceled order was never shipped, so this stays false for it.
    pub fn is_after_shipping(&self) -> bool {
        matches!(self, Self::Shipping | Self::DeliveryCompleted)
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotPaid => "not_paid",
            Self::Paid => "paid",
            Self::Shipping => "shipping",
            Self::DeliveryCompleted => "delivery_completed",
            Self::Canceled => "canceled",
        }
    }
}

impl StatusMachine for OrderStatus {
    fn initial() -> Self {
        Self::NotPaid
    }

    fn can_transition_to(self, target: Self) -> bool {
        match self {
            Self::NotPaid => matches!(target, Self::Paid | Self::Canceled),
            Self::Paid => matches!(target, Self::Shipping | Self::Canceled),
            Self::Shipping => matches!(target, Self::DeliveryCompleted),
            Self::DeliveryCompleted | Self::Canceled => false,
        }
    }

    fn allows_content_changes(self) -> bool {
        !self.is_after_shipping()
    }

    fn all() -> &'static [Self] {
        &[
            Self::NotPaid,
            Self::Paid,
            Self::Shipping,
            Self::DeliveryCompleted,
            Self::Canceled,
        ]
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_paid" => Ok(Self::NotPaid),
            "paid" => Ok(Self::Paid),
            "shipping" => Ok(Self::Shipping),
            "delivery_completed" => Ok(Self::DeliveryCompleted),
            "canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::validation(format!(
                "unknown order status: {}",
                s
            ))),
        }
    }
}

// ============================================================================
// ReleaseStatus - the reduced lifecycle without payment
// ============================================================================

/// Reduced lifecycle: ready until released or canceled, both terminal
///
/// Contents are mutable only in the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReleaseStatus {
    /// Accepted, waiting in the warehouse
    Ready,
    /// Handed over for fulfillment
    Released,
    /// Canceled while still ready
    Canceled,
}

impl ReleaseStatus {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Released => "released",
            Self::Canceled => "canceled",
        }
    }
}

impl StatusMachine for ReleaseStatus {
    fn initial() -> Self {
        Self::Ready
    }

    fn can_transition_to(self, target: Self) -> bool {
        match self {
            Self::Ready => matches!(target, Self::Released | Self::Canceled),
            Self::Released | Self::Canceled => false,
        }
    }

    fn allows_content_changes(self) -> bool {
        matches!(self, Self::Ready)
    }

    fn all() -> &'static [Self] {
        &[Self::Ready, Self::Released, Self::Canceled]
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReleaseStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready" => Ok(Self::Ready),
            "released" => Ok(Self::Released),
            "canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::validation(format!(
                "unknown release status: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every machine starts somewhere it can leave.
    fn assert_initial_has_exit<S: StatusMachine>() {
        assert!(!S::initial().is_terminal());
    }

    /// Terminal states permit no transition at all, to any state.
    fn assert_terminals_are_dead_ends<S: StatusMachine>() {
        for &state in S::all() {
            if state.is_terminal() {
                for &target in S::all() {
                    assert!(
                        !state.can_transition_to(target),
                        "{} must not reach {}",
                        state,
                        target
                    );
                }
            }
        }
    }

    mod order_status {
        use super::*;
        use OrderStatus::*;

        #[test]
        fn initial_is_not_paid() {
            assert_eq!(OrderStatus::initial(), NotPaid);
        }

        #[test]
        fn transition_table() {
            // (from, to, legal)
            let cases = [
                (NotPaid, Paid, true),
                (NotPaid, Canceled, true),
                (NotPaid, Shipping, false),
                (NotPaid, DeliveryCompleted, false),
                (Paid, Shipping, true),
                (Paid, Canceled, true),
                (Paid, DeliveryCompleted, false),
                (Paid, NotPaid, false),
                (Shipping, DeliveryCompleted, true),
                (Shipping, Canceled, false),
                (Shipping, Paid, false),
                (DeliveryCompleted, Canceled, false),
                (Canceled, NotPaid, false),
                (Canceled, Paid, false),
            ];
            for (from, to, legal) in cases {
                assert_eq!(
                    from.can_transition_to(to),
                    legal,
                    "{} -> {} should be {}",
                    from,
                    to,
                    legal
                );
            }
        }

        #[test]
        fn no_state_transitions_to_itself() {
            for &state in OrderStatus::all() {
                assert!(!state.can_transition_to(state));
            }
        }

        #[test]
        fn terminal_states() {
            assert!(DeliveryCompleted.is_terminal());
            assert!(Canceled.is_terminal());
            assert!(!NotPaid.is_terminal());
            assert!(!Paid.is_terminal());
            assert!(!Shipping.is_terminal());
        }

        #[test]
        fn after_shipping_covers_shipping_and_delivered() {
            assert!(Shipping.is_after_shipping());
            assert!(DeliveryCompleted.is_after_shipping());
            assert!(!NotPaid.is_after_shipping());
            assert!(!Paid.is_after_shipping());
            assert!(!Canceled.is_after_shipping());
        }

        #[test]
        fn content_changes_follow_shipping_gate() {
            assert!(NotPaid.allows_content_changes());
            assert!(Paid.allows_content_changes());
            assert!(!Shipping.allows_content_changes());
            assert!(!DeliveryCompleted.allows_content_changes());
        }

        #[test]
        fn string_round_trip() {
            for &state in OrderStatus::all() {
                assert_eq!(state.as_str().parse::<OrderStatus>().unwrap(), state);
            }
        }

        #[test]
        fn unknown_string_rejected() {
            assert!("refunded".parse::<OrderStatus>().is_err());
        }
    }

    mod release_status {
        use super::*;
        use ReleaseStatus::*;

        #[test]
        fn initial_is_ready() {
            assert_eq!(ReleaseStatus::initial(), Ready);
        }

        #[test]
        fn ready_reaches_both_ends() {
            assert!(Ready.can_transition_to(Released));
            assert!(Ready.can_transition_to(Canceled));
        }

        #[test]
        fn both_ends_are_terminal() {
            assert!(Released.is_terminal());
            assert!(Canceled.is_terminal());
        }

        #[test]
        fn contents_mutable_only_while_ready() {
            assert!(Ready.allows_content_changes());
            assert!(!Released.allows_content_changes());
            assert!(!Canceled.allows_content_changes());
        }

        #[test]
        fn string_round_trip() {
            for &state in ReleaseStatus::all() {
                assert_eq!(state.as_str().parse::<ReleaseStatus>().unwrap(), state);
            }
        }
    }

    #[test]
    fn both_machines_start_with_an_exit() {
        assert_initial_has_exit::<OrderStatus>();
        assert_initial_has_exit::<ReleaseStatus>();
    }

    #[test]
    fn both_machines_have_dead_end_terminals() {
        assert_terminals_are_dead_ends::<OrderStatus>();
        assert_terminals_are_dead_ends::<ReleaseStatus>();
    }
}
