//! Test Data Builders
//!
//! Provides builder patterns for constructing bookings and modifications
//! with sensible defaults. Tests only specify the fields they care about.

use chrono::NaiveDate;
use core_kernel::{BookingId, ModificationId, RentalPeriod};
use domain_rental::{Booking, BookingModification, Vehicle};

use crate::fixtures::{DateFixtures, VehicleFixtures};

/// Builder for test bookings
pub struct TestBookingBuilder {
    id: BookingId,
    vehicle: Vehicle,
    period: RentalPeriod,
    distance_km: i64,
    deductible_reduction: bool,
}

impl Default for TestBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBookingBuilder {
    /// One day, 100 km, standard vehicle, no deductible reduction
    pub fn new() -> Self {
        Self {
            id: BookingId::new(1),
            vehicle: VehicleFixtures::standard(),
            period: DateFixtures::period_of(1),
            distance_km: 100,
            deductible_reduction: false,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = BookingId::new(id);
        self
    }

    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = vehicle;
        self
    }

    /// Sets the duration, starting at the fixture start date
    pub fn with_days(mut self, days: i64) -> Self {
        self.period = DateFixtures::period_of(days);
        self
    }

    pub fn with_period(mut self, period: RentalPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn with_distance(mut self, distance_km: i64) -> Self {
        self.distance_km = distance_km;
        self
    }

    pub fn with_deductible_reduction(mut self) -> Self {
        self.deductible_reduction = true;
        self
    }

    pub fn build(self) -> Booking {
        Booking::builder()
            .id(self.id)
            .vehicle(self.vehicle)
            .period(self.period)
            .distance_km(self.distance_km)
            .deductible_reduction(self.deductible_reduction)
            .build()
            .expect("test booking is valid")
    }
}

/// Builder for test modifications
pub struct TestModificationBuilder {
    modification: BookingModification,
}

impl TestModificationBuilder {
    /// A modification of the given booking that overrides nothing
    pub fn for_booking(booking: &Booking) -> Self {
        Self {
            modification: BookingModification::new(ModificationId::new(1), booking.id()),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.modification.id = ModificationId::new(id);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.modification.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.modification.end_date = Some(date);
        self
    }

    /// Moves the end date so the rental lasts `days` days from the fixture start
    pub fn with_days(mut self, days: i64) -> Self {
        self.modification.end_date = Some(DateFixtures::period_of(days).end());
        self
    }

    pub fn with_distance(mut self, distance_km: i64) -> Self {
        self.modification.distance_km = Some(distance_km);
        self
    }

    pub fn build(self) -> BookingModification {
        self.modification
    }
}
