//! Booking modifications
//!
//! A modification changes the dates and/or distance of an existing booking.
//! [`resolve`] overlays it onto the original to get the effective booking,
//! which is then priced like any other booking.

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::{BookingId, ModificationId};
use crate::booking::Booking;
use crate::error::RentalError;

/// A change requested on an existing booking
///
/// Absent fields keep the original booking's value. The deductible
/// reduction option cannot be changed by a modification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingModification {
    pub id: ModificationId,
    pub booking_id: BookingId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_km: Option<i64>,
}

impl BookingModification {
    /// Creates a modification that overrides nothing
    pub fn new(id: ModificationId, booking_id: BookingId) -> Self {
        Self {
            id,
            booking_id,
            start_date: None,
            end_date: None,
            distance_km: None,
        }
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_distance_km(mut self, distance_km: i64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }
}

/// Builds the effective booking after applying a modification
///
/// # Errors
///
/// - `RentalError::BookingMismatch` if the modification targets another booking
/// - `RentalError::Temporal` if the resulting end date precedes the start date
/// - `RentalError::InvalidPricingInput` if the overriding distance is negative
pub fn resolve(original: &Booking, modification: &BookingModification) -> Result<Booking, RentalError> {
    if modification.booking_id != original.id() {
        return Err(RentalError::BookingMismatch {
            expected: modification.booking_id,
            actual: original.id(),
        });
    }

    let period = original
        .period()
        .with_bounds(modification.start_date, modification.end_date)?;
    let distance_km = modification.distance_km.unwrap_or(original.distance_km());

    original.with_terms(period, distance_km)
}
