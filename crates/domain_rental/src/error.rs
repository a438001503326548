//! Rental domain errors
//!
//! This module defines the error types raised while building bookings,
//! resolving modifications and pricing rentals.

use core_kernel::{BookingId, MoneyError, TemporalError};
use thiserror::Error;

/// Errors that can occur in the rental domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RentalError {
    /// Pricing inputs violate a precondition
    #[error("Invalid pricing input: {0}")]
    InvalidPricingInput(String),

    /// A vehicle rate is negative
    #[error("Invalid rate for {field}: {value}")]
    InvalidRate {
        field: &'static str,
        value: i64,
    },

    /// Discount tiers are malformed
    #[error("Invalid discount schedule: {0}")]
    InvalidDiscountSchedule(String),

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A modification was applied to a booking it does not target
    #[error("Modification targets booking {expected} but was applied to {actual}")]
    BookingMismatch {
        expected: BookingId,
        actual: BookingId,
    },

    /// Rental period error
    #[error(transparent)]
    Temporal(#[from] TemporalError),

    /// Arithmetic error
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl RentalError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RentalError::InvalidPricingInput(message.into())
    }
}
