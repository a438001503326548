//! Bookings
//!
//! A booking ties a vehicle to a rental period, a driven distance and the
//! optional deductible reduction. Its price is not stored: callers compute a
//! [`PricingBreakdown`] once with [`Booking::price`] and pass it along.

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::{BookingId, RentalPeriod};
use crate::error::RentalError;
use crate::pricing::{PricingBreakdown, PricingEngine, PricingInput};
use crate::vehicle::Vehicle;

/// A vehicle booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    id: BookingId,
    vehicle: Vehicle,
    period: RentalPeriod,
    distance_km: i64,
    deductible_reduction_opted: bool,
}

impl Booking {
    /// Starts building a booking
    pub fn builder() -> BookingBuilder {
        BookingBuilder::new()
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn period(&self) -> RentalPeriod {
        self.period
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }

    pub fn distance_km(&self) -> i64 {
        self.distance_km
    }

    pub fn deductible_reduction_opted(&self) -> bool {
        self.deductible_reduction_opted
    }

    /// Inclusive number of rental days
    pub fn duration_days(&self) -> i64 {
        self.period.duration_days()
    }

    /// Inputs for the pricing engine
    pub fn pricing_input(&self) -> PricingInput {
        PricingInput {
            duration_days: self.duration_days(),
            distance_km: self.distance_km,
            price_per_day: self.vehicle.price_per_day(),
            price_per_km: self.vehicle.price_per_km(),
            deductible_reduction_opted: self.deductible_reduction_opted,
        }
    }

    /// Prices this booking with the given engine
    pub fn price(&self, engine: &PricingEngine) -> Result<PricingBreakdown, RentalError> {
        engine.price(&self.pricing_input())
    }

    /// Returns a copy with period and distance replaced
    pub(crate) fn with_terms(&self, period: RentalPeriod, distance_km: i64) -> Result<Self, RentalError> {
        if distance_km < 0 {
            return Err(RentalError::invalid_input(format!(
                "distance must not be negative, got {} km",
                distance_km
            )));
        }
        Ok(Self {
            period,
            distance_km,
            ..self.clone()
        })
    }
}

/// Builder for [`Booking`]
///
/// # Example
///
/// ```rust,ignore
/// let booking = Booking::builder()
///     .id(BookingId::new(1))
///     .vehicle(vehicle)
///     .period(RentalPeriod::new(start, end)?)
///     .distance_km(100)
///     .deductible_reduction(true)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct BookingBuilder {
    id: Option<BookingId>,
    vehicle: Option<Vehicle>,
    period: Option<RentalPeriod>,
    distance_km: Option<i64>,
    deductible_reduction_opted: bool,
}

impl BookingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: BookingId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn period(mut self, period: RentalPeriod) -> Self {
        self.period = Some(period);
        self
    }

    pub fn distance_km(mut self, distance_km: i64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    /// Opts in or out of the deductible reduction (default: out)
    pub fn deductible_reduction(mut self, opted: bool) -> Self {
        self.deductible_reduction_opted = opted;
        self
    }

    /// Builds the booking
    ///
    /// # Errors
    ///
    /// - `RentalError::MissingRequiredField` if id, vehicle, period or distance is unset
    /// - `RentalError::InvalidPricingInput` if the distance is negative
    pub fn build(self) -> Result<Booking, RentalError> {
        let id = self.id.ok_or(RentalError::MissingRequiredField("id"))?;
        let vehicle = self.vehicle.ok_or(RentalError::MissingRequiredField("vehicle"))?;
        let period = self.period.ok_or(RentalError::MissingRequiredField("period"))?;
        let distance_km = self
            .distance_km
            .ok_or(RentalError::MissingRequiredField("distance_km"))?;

        if distance_km < 0 {
            return Err(RentalError::invalid_input(format!(
                "distance must not be negative, got {} km",
                distance_km
            )));
        }

        Ok(Booking {
            id,
            vehicle,
            period,
            distance_km,
            deductible_reduction_opted: self.deductible_reduction_opted,
        })
    }
}
