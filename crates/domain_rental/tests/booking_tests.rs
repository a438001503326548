//! Tests for vehicles, bookings and modification resolution

use core_kernel::{Amount, BookingId, ModificationId, RentalPeriod, TemporalError, VehicleId};
use domain_rental::{resolve, Booking, BookingModification, PricingEngine, RentalError, Vehicle};
use test_utils::{DateFixtures, ScenarioFixtures, TestBookingBuilder, TestModificationBuilder, VehicleFixtures};

mod vehicle_tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let vehicle = Vehicle::new(VehicleId::new(1), Amount::from_minor(2000), Amount::from_minor(10)).unwrap();

        assert_eq!(vehicle.id(), VehicleId::new(1));
        assert_eq!(vehicle.price_per_day(), Amount::from_minor(2000));
        assert_eq!(vehicle.price_per_km(), Amount::from_minor(10));
    }

    #[test]
    fn test_vehicle_rejects_negative_rates() {
        let result = Vehicle::new(VehicleId::new(1), Amount::from_minor(-5), Amount::from_minor(10));
        assert_eq!(
            result,
            Err(RentalError::InvalidRate {
                field: "price_per_day",
                value: -5,
            })
        );

        let result = Vehicle::new(VehicleId::new(1), Amount::from_minor(5), Amount::from_minor(-10));
        assert!(matches!(result, Err(RentalError::InvalidRate { field: "price_per_km", .. })));
    }
}

mod builder_tests {
    use super::*;

    #[test]
    fn test_builder_requires_every_field() {
        let period = DateFixtures::period_of(1);

        let missing_id = Booking::builder()
            .vehicle(VehicleFixtures::standard())
            .period(period)
            .distance_km(10)
            .build();
        assert_eq!(missing_id, Err(RentalError::MissingRequiredField("id")));

        let missing_vehicle = Booking::builder()
            .id(BookingId::new(1))
            .period(period)
            .distance_km(10)
            .build();
        assert_eq!(missing_vehicle, Err(RentalError::MissingRequiredField("vehicle")));

        let missing_period = Booking::builder()
            .id(BookingId::new(1))
            .vehicle(VehicleFixtures::standard())
            .distance_km(10)
            .build();
        assert_eq!(missing_period, Err(RentalError::MissingRequiredField("period")));

        let missing_distance = Booking::builder()
            .id(BookingId::new(1))
            .vehicle(VehicleFixtures::standard())
            .period(period)
            .build();
        assert_eq!(missing_distance, Err(RentalError::MissingRequiredField("distance_km")));
    }

    #[test]
    fn test_builder_rejects_negative_distance() {
        let result = Booking::builder()
            .id(BookingId::new(1))
            .vehicle(VehicleFixtures::standard())
            .period(DateFixtures::period_of(1))
            .distance_km(-1)
            .build();

        assert!(matches!(result, Err(RentalError::InvalidPricingInput(_))));
    }

    #[test]
    fn test_deductible_reduction_defaults_to_off() {
        let booking = ScenarioFixtures::single_day_booking();
        assert!(!booking.deductible_reduction_opted());
    }

    #[test]
    fn test_pricing_input_mirrors_booking() {
        let booking = TestBookingBuilder::new()
            .with_days(3)
            .with_distance(250)
            .with_deductible_reduction()
            .build();
        let input = booking.pricing_input();

        assert_eq!(input.duration_days, 3);
        assert_eq!(input.distance_km, 250);
        assert_eq!(input.price_per_day, Amount::from_minor(2000));
        assert_eq!(input.price_per_km, Amount::from_minor(10));
        assert!(input.deductible_reduction_opted);
    }

    #[test]
    fn test_booking_price() {
        let breakdown = ScenarioFixtures::eleven_day_booking()
            .price(&PricingEngine::default())
            .unwrap();

        assert_eq!(breakdown.duration_days(), 11);
        assert_eq!(breakdown.total_price(), Amount::from_minor(8400));
    }
}

mod resolve_tests {
    use super::*;

    #[test]
    fn test_noop_modification_keeps_everything() {
        let original = TestBookingBuilder::new().with_days(3).with_deductible_reduction().build();
        let modification = TestModificationBuilder::for_booking(&original).build();

        let effective = resolve(&original, &modification).unwrap();
        assert_eq!(effective, original);
    }

    #[test]
    fn test_distance_override() {
        let original = ScenarioFixtures::single_day_booking();
        let effective = resolve(&original, &ScenarioFixtures::longer_distance_modification()).unwrap();

        assert_eq!(effective.distance_km(), 150);
        assert_eq!(effective.period(), original.period());
        assert_eq!(effective.vehicle(), original.vehicle());
    }

    #[test]
    fn test_start_date_override() {
        let original = TestBookingBuilder::new().with_days(5).build();
        let new_start = DateFixtures::ymd(2015, 12, 10);
        let modification = TestModificationBuilder::for_booking(&original)
            .with_start_date(new_start)
            .build();

        let effective = resolve(&original, &modification).unwrap();
        assert_eq!(effective.start_date(), new_start);
        assert_eq!(effective.end_date(), original.end_date());
        assert_eq!(effective.duration_days(), 3);
    }

    #[test]
    fn test_deductible_reduction_is_never_overridden() {
        let original = TestBookingBuilder::new().with_deductible_reduction().build();
        let modification = TestModificationBuilder::for_booking(&original)
            .with_days(4)
            .with_distance(10)
            .build();

        let effective = resolve(&original, &modification).unwrap();
        assert!(effective.deductible_reduction_opted());
        assert_eq!(effective.duration_days(), 4);
    }

    #[test]
    fn test_inverted_period_rejected() {
        let original = TestBookingBuilder::new().with_days(2).build();
        let modification = TestModificationBuilder::for_booking(&original)
            .with_start_date(DateFixtures::ymd(2016, 1, 1))
            .build();

        let result = resolve(&original, &modification);
        assert!(matches!(
            result,
            Err(RentalError::Temporal(TemporalError::InvalidPeriod { .. }))
        ));
    }

    #[test]
    fn test_negative_distance_override_rejected() {
        let original = TestBookingBuilder::new().build();
        let modification = TestModificationBuilder::for_booking(&original)
            .with_distance(-10)
            .build();

        assert!(matches!(
            resolve(&original, &modification),
            Err(RentalError::InvalidPricingInput(_))
        ));
    }

    #[test]
    fn test_mismatched_booking_rejected() {
        let original = TestBookingBuilder::new().with_id(7).build();
        let modification = BookingModification::new(ModificationId::new(1), BookingId::new(8));

        assert_eq!(
            resolve(&original, &modification),
            Err(RentalError::BookingMismatch {
                expected: BookingId::new(8),
                actual: BookingId::new(7),
            })
        );
    }

    #[test]
    fn test_effective_booking_keeps_original_identity() {
        let original = TestBookingBuilder::new().with_id(3).build();
        let modification = TestModificationBuilder::for_booking(&original).with_distance(1).build();

        let effective = resolve(&original, &modification).unwrap();
        assert_eq!(effective.id(), BookingId::new(3));
        assert_ne!(effective, original);
        assert_eq!(
            original.period(),
            RentalPeriod::single_day(DateFixtures::rental_start())
        );
    }
}
