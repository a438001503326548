//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating valid pricing inputs,
//! breakdowns and bookings.

use core_kernel::Amount;
use domain_rental::{price, Booking, PricingBreakdown, PricingInput};
use proptest::prelude::*;

use crate::builders::TestBookingBuilder;
use crate::fixtures::VehicleFixtures;

/// Strategy for rental durations, covering every discount tier
pub fn duration_strategy() -> impl Strategy<Value = i64> {
    1i64..60i64
}

/// Strategy for driven distances
pub fn distance_strategy() -> impl Strategy<Value = i64> {
    0i64..5_000i64
}

/// Strategy for daily rates, including ones that do not divide evenly
pub fn daily_rate_strategy() -> impl Strategy<Value = Amount> {
    (0i64..20_000i64).prop_map(Amount::from_minor)
}

/// Strategy for per-kilometre rates
pub fn km_rate_strategy() -> impl Strategy<Value = Amount> {
    (0i64..100i64).prop_map(Amount::from_minor)
}

/// Strategy for valid pricing inputs
pub fn pricing_input_strategy() -> impl Strategy<Value = PricingInput> {
    (
        duration_strategy(),
        distance_strategy(),
        daily_rate_strategy(),
        km_rate_strategy(),
        any::<bool>(),
    )
        .prop_map(|(duration_days, distance_km, price_per_day, price_per_km, opted)| PricingInput {
            duration_days,
            distance_km,
            price_per_day,
            price_per_km,
            deductible_reduction_opted: opted,
        })
}

/// Strategy for breakdowns priced with the standard policy
pub fn breakdown_strategy() -> impl Strategy<Value = PricingBreakdown> {
    pricing_input_strategy().prop_map(|input| {
        price(
            input.duration_days,
            input.distance_km,
            input.price_per_day,
            input.price_per_km,
            input.deductible_reduction_opted,
        )
        .expect("generated inputs are valid")
    })
}

/// Strategy for bookings of one vehicle with random duration, distance and option
pub fn booking_strategy() -> impl Strategy<Value = Booking> {
    (duration_strategy(), distance_strategy(), any::<bool>(), 0i64..5_000i64, 0i64..50i64).prop_map(
        |(days, distance, opted, per_day, per_km)| {
            let builder = TestBookingBuilder::new()
                .with_vehicle(VehicleFixtures::with_rates(1, per_day, per_km))
                .with_days(days)
                .with_distance(distance);
            if opted {
                builder.with_deductible_reduction().build()
            } else {
                builder.build()
            }
        },
    )
}
