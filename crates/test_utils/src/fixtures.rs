//! Pre-built Test Fixtures
//!
//! Provides ready-to-use vehicles, dates and reference bookings. The
//! scenario fixtures match the worked examples used throughout the test
//! suite so expected amounts can be checked by hand.

use chrono::NaiveDate;
use core_kernel::{Amount, BookingId, ModificationId, RentalPeriod, VehicleId};
use domain_rental::{Booking, BookingModification, Vehicle};

/// Fixture for vehicles
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// 2000 per day, 10 per km
    pub fn standard() -> Vehicle {
        Self::with_rates(1, 2000, 10)
    }

    /// 1000 per day, no distance charge
    pub fn daily_only() -> Vehicle {
        Self::with_rates(2, 1000, 0)
    }

    /// Cheap vehicle whose commission does not cover the assistance fee
    pub fn budget() -> Vehicle {
        Self::with_rates(3, 300, 0)
    }

    pub fn with_rates(id: u64, price_per_day: i64, price_per_km: i64) -> Vehicle {
        Vehicle::new(
            VehicleId::new(id),
            Amount::from_minor(price_per_day),
            Amount::from_minor(price_per_km),
        )
        .expect("fixture rates are non-negative")
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// Dec 8, 2015
    pub fn rental_start() -> NaiveDate {
        Self::ymd(2015, 12, 8)
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    /// Period of `days` days starting at [`DateFixtures::rental_start`]
    pub fn period_of(days: i64) -> RentalPeriod {
        let start = Self::rental_start();
        RentalPeriod::new(start, start + chrono::Duration::days(days - 1))
            .expect("fixture period is ordered")
    }
}

/// Reference scenarios
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// One day, 100 km, standard vehicle, no option
    pub fn single_day_booking() -> Booking {
        Booking::builder()
            .id(BookingId::new(1))
            .vehicle(VehicleFixtures::standard())
            .period(DateFixtures::period_of(1))
            .distance_km(100)
            .build()
            .expect("fixture booking is valid")
    }

    /// Distance of [`ScenarioFixtures::single_day_booking`] raised to 150 km
    pub fn longer_distance_modification() -> BookingModification {
        BookingModification::new(ModificationId::new(1), BookingId::new(1)).with_distance_km(150)
    }

    /// Eleven days at 1000 per day, crossing every discount tier
    pub fn eleven_day_booking() -> Booking {
        Booking::builder()
            .id(BookingId::new(2))
            .vehicle(VehicleFixtures::daily_only())
            .period(DateFixtures::period_of(11))
            .distance_km(0)
            .build()
            .expect("fixture booking is valid")
    }
}
