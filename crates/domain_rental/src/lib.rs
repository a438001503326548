//! Rental Domain - Vehicles, Bookings and Pricing
//!
//! This crate prices vehicle rentals and resolves booking modifications.
//!
//! # Pricing Rules
//!
//! - The daily price is discounted per day of the rental: 10% from day 2,
//!   30% from day 5 and 50% from day 11
//! - Distance is charged per kilometre without discount
//! - 30% of the rental price is commission, half of which goes to insurance,
//!   a fixed daily fee to assistance and the remainder to the platform
//! - The deductible reduction option costs a fixed daily fee
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rental::{PricingEngine, resolve};
//!
//! let engine = PricingEngine::default();
//! let original = booking.price(&engine)?;
//! let modified = resolve(&booking, &modification)?.price(&engine)?;
//! ```

pub mod vehicle;
pub mod booking;
pub mod modification;
pub mod pricing;
pub mod error;

pub use vehicle::Vehicle;
pub use booking::{Booking, BookingBuilder};
pub use modification::{BookingModification, resolve};
pub use pricing::{
    price, DiscountSchedule, DiscountTier, PricingBreakdown, PricingEngine, PricingInput,
    PricingPolicy,
};
pub use error::RentalError;
