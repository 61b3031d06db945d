//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! so callers never see String errors or ad-hoc panics.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value-object invariant was violated at construction time
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The tendered amount does not cover the order total
    #[error("Insufficient payment: paid {paid} but order total is {total}")]
    InsufficientPayment { paid: i64, total: i64 },

    /// The current status forbids the requested change
    #[error("Invalid status transition: {0}")]
    InvalidStatusTransition(String),
}

impl DomainError {
    /// Creates a validation error for constructor invariant violations.
    ///
    /// Use this when a value object cannot be built from the given input:
    /// - Required strings are empty or missing
    /// - Amounts or counts are below their minimum
    /// - Collections that must be non-empty are empty
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an insufficient payment error
    pub fn insufficient_payment(paid: i64, total: i64) -> Self {
        Self::InsufficientPayment { paid, total }
    }

    /// Create an invalid status transition error
    pub fn invalid_status_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStatusTransition(msg.into())
    }
}
