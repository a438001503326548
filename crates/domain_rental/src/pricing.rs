//! Rental pricing
//!
//! Turns a rental's duration, distance and options into a [`PricingBreakdown`]
//! and splits the platform commission between the insurer, the assistance
//! provider and the platform itself.
//!
//! Every quantity is an integer [`Amount`]; each fractional step (the daily
//! discount, the commission, the insurance share) is truncated toward zero
//! where it is computed, never deferred to the end.

use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{Amount, Rate};
use crate::error::RentalError;

/// Fixed assistance fee charged per rental day, in minor units
pub const ASSISTANCE_FEE_PER_DAY: Amount = Amount::from_minor(100);

/// Deductible reduction option price per rental day, in minor units
pub const DEDUCTIBLE_REDUCTION_FEE_PER_DAY: Amount = Amount::from_minor(400);

/// A discount that applies from a given rental day onwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountTier {
    /// First 1-indexed rental day the discount applies to
    pub from_day: i64,
    /// Discount off the daily price
    pub discount: Rate,
}

impl DiscountTier {
    pub fn new(from_day: i64, discount: Rate) -> Self {
        Self { from_day, discount }
    }
}

/// Daily discount schedule keyed by day number within the rental
///
/// The schedule applies per day: day 5 of a ten-day rental is discounted at
/// the day-5 rate no matter how long the rental is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Creates a schedule from tiers sorted by starting day
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidDiscountSchedule` if the tiers are empty,
    /// do not start at day 1, are not strictly increasing, or carry a
    /// discount outside `[0, 1]`.
    pub fn new(tiers: Vec<DiscountTier>) -> Result<Self, RentalError> {
        let first = tiers
            .first()
            .ok_or_else(|| RentalError::InvalidDiscountSchedule("no tiers".to_string()))?;

        if first.from_day != 1 {
            return Err(RentalError::InvalidDiscountSchedule(format!(
                "first tier starts at day {}, expected day 1",
                first.from_day
            )));
        }

        for pair in tiers.windows(2) {
            if pair[1].from_day <= pair[0].from_day {
                return Err(RentalError::InvalidDiscountSchedule(format!(
                    "tier starting at day {} does not follow day {}",
                    pair[1].from_day, pair[0].from_day
                )));
            }
        }

        if let Some(tier) = tiers.iter().find(|t| !t.discount.is_fraction()) {
            return Err(RentalError::InvalidDiscountSchedule(format!(
                "discount {} at day {} is outside 0%..100%",
                tier.discount, tier.from_day
            )));
        }

        Ok(Self { tiers })
    }

    /// The standard schedule: day 1 full price, days 2-4 10% off,
    /// days 5-10 30% off, day 11 onwards 50% off
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                DiscountTier::new(1, Rate::ZERO),
                DiscountTier::new(2, Rate::from_percentage(dec!(10))),
                DiscountTier::new(5, Rate::from_percentage(dec!(30))),
                DiscountTier::new(11, Rate::from_percentage(dec!(50))),
            ],
        }
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Returns the discount for a 1-indexed rental day
    pub fn discount_for_day(&self, day: i64) -> Rate {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.from_day <= day)
            .map(|tier| tier.discount)
            .unwrap_or(Rate::ZERO)
    }

    /// Price of the given day after its discount, truncated
    pub fn day_price(&self, day: i64, price_per_day: Amount) -> Result<Amount, RentalError> {
        Ok(self.discount_for_day(day).complement().apply(&price_per_day)?)
    }

    /// Sum of the discounted, individually truncated day prices
    pub fn time_price(&self, price_per_day: Amount, duration_days: i64) -> Result<Amount, RentalError> {
        (1..=duration_days).try_fold(Amount::ZERO, |total, day| -> Result<Amount, RentalError> {
            let day_price = self.day_price(day, price_per_day)?;
            Ok(total.checked_add(&day_price)?)
        })
    }
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// The commercial rules applied by the pricing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingPolicy {
    /// Daily discount tiers
    pub discount_schedule: DiscountSchedule,
    /// Platform commission taken from the total price
    pub commission_rate: Rate,
    /// Share of the commission allocated to the insurer
    pub insurance_share: Rate,
    /// Assistance fee per rental day
    pub assistance_fee_per_day: Amount,
    /// Deductible reduction option price per rental day
    pub deductible_reduction_fee_per_day: Amount,
}

impl PricingPolicy {
    /// The standard policy: 30% commission, half of it to insurance
    pub fn standard() -> Self {
        Self {
            discount_schedule: DiscountSchedule::standard(),
            commission_rate: Rate::from_percentage(dec!(30)),
            insurance_share: Rate::from_percentage(dec!(50)),
            assistance_fee_per_day: ASSISTANCE_FEE_PER_DAY,
            deductible_reduction_fee_per_day: DEDUCTIBLE_REDUCTION_FEE_PER_DAY,
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

/// Everything the engine needs to price one rental
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingInput {
    pub duration_days: i64,
    pub distance_km: i64,
    pub price_per_day: Amount,
    pub price_per_km: Amount,
    pub deductible_reduction_opted: bool,
}

impl PricingInput {
    /// Checks the pricing preconditions
    ///
    /// Invalid inputs are rejected as they are; nothing is clamped.
    pub fn validate(&self) -> Result<(), RentalError> {
        if self.duration_days < 1 {
            return Err(RentalError::invalid_input(format!(
                "duration must be at least 1 day, got {}",
                self.duration_days
            )));
        }
        if self.distance_km < 0 {
            return Err(RentalError::invalid_input(format!(
                "distance must not be negative, got {} km",
                self.distance_km
            )));
        }
        if self.price_per_day.is_negative() {
            return Err(RentalError::invalid_input(format!(
                "price per day must not be negative, got {}",
                self.price_per_day
            )));
        }
        if self.price_per_km.is_negative() {
            return Err(RentalError::invalid_input(format!(
                "price per km must not be negative, got {}",
                self.price_per_km
            )));
        }
        Ok(())
    }
}

/// Priced breakdown of a single rental
///
/// # Invariants
///
/// - `commission = insurance_fee + assistance_fee + platform_fee`
/// - `price_with_options = total_price + deductible_reduction_fee`
///
/// `platform_fee` may be negative when the fixed assistance fee exceeds the
/// commission left after insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PricingBreakdown {
    duration_days: i64,
    time_price: Amount,
    distance_price: Amount,
    total_price: Amount,
    commission: Amount,
    owner_share: Amount,
    insurance_fee: Amount,
    assistance_fee: Amount,
    platform_fee: Amount,
    deductible_reduction_fee: Amount,
    price_with_options: Amount,
}

impl PricingBreakdown {
    pub fn duration_days(&self) -> i64 {
        self.duration_days
    }

    /// Discounted price of the rental days
    pub fn time_price(&self) -> Amount {
        self.time_price
    }

    /// Price of the distance driven
    pub fn distance_price(&self) -> Amount {
        self.distance_price
    }

    /// Rental price before options
    pub fn total_price(&self) -> Amount {
        self.total_price
    }

    pub fn commission(&self) -> Amount {
        self.commission
    }

    pub fn insurance_fee(&self) -> Amount {
        self.insurance_fee
    }

    pub fn assistance_fee(&self) -> Amount {
        self.assistance_fee
    }

    pub fn platform_fee(&self) -> Amount {
        self.platform_fee
    }

    pub fn deductible_reduction_fee(&self) -> Amount {
        self.deductible_reduction_fee
    }

    /// Price paid by the driver, options included
    pub fn price_with_options(&self) -> Amount {
        self.price_with_options
    }

    /// Part of the total price kept by the owner
    pub fn owner_share(&self) -> Amount {
        self.owner_share
    }
}

/// Prices rentals according to a [`PricingPolicy`]
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    /// Creates an engine applying the given policy
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Prices a rental
    ///
    /// # Errors
    ///
    /// - `RentalError::InvalidPricingInput` if a precondition is violated
    /// - `RentalError::Money` if an amount overflows
    pub fn price(&self, input: &PricingInput) -> Result<PricingBreakdown, RentalError> {
        input.validate()?;

        let policy = &self.policy;
        let days = input.duration_days;

        let time_price = policy.discount_schedule.time_price(input.price_per_day, days)?;
        let distance_price = input.price_per_km.times(input.distance_km)?;
        let total_price = time_price.checked_add(&distance_price)?;

        let commission = policy.commission_rate.apply(&total_price)?;
        let owner_share = total_price.checked_sub(&commission)?;
        let insurance_fee = policy.insurance_share.apply(&commission)?;
        let assistance_fee = policy.assistance_fee_per_day.times(days)?;
        let platform_fee = commission
            .checked_sub(&insurance_fee)?
            .checked_sub(&assistance_fee)?;

        let deductible_reduction_fee = if input.deductible_reduction_opted {
            policy.deductible_reduction_fee_per_day.times(days)?
        } else {
            Amount::ZERO
        };
        let price_with_options = total_price.checked_add(&deductible_reduction_fee)?;

        tracing::trace!(
            duration_days = days,
            distance_km = input.distance_km,
            %total_price,
            %commission,
            %platform_fee,
            "Priced rental"
        );

        Ok(PricingBreakdown {
            duration_days: days,
            time_price,
            distance_price,
            total_price,
            commission,
            owner_share,
            insurance_fee,
            assistance_fee,
            platform_fee,
            deductible_reduction_fee,
            price_with_options,
        })
    }
}

/// Prices a rental with the standard policy
pub fn price(
    duration_days: i64,
    distance_km: i64,
    price_per_day: Amount,
    price_per_km: Amount,
    deductible_reduction_opted: bool,
) -> Result<PricingBreakdown, RentalError> {
    PricingEngine::default().price(&PricingInput {
        duration_days,
        distance_km,
        price_per_day,
        price_per_km,
        deductible_reduction_opted,
    })
}
