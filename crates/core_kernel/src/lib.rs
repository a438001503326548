//! Core Kernel - Foundational types for the rental allocation system
//!
//! This crate provides the building blocks shared by the pricing and ledger
//! domains:
//! - Integer money amounts in minor units, with exact decimal rates
//! - Inclusive calendar rental periods
//! - Typed identifiers for vehicles, bookings and modifications

pub mod money;
pub mod temporal;
pub mod identifiers;

pub use money::{Amount, Rate, MoneyError};
pub use temporal::{RentalPeriod, TemporalError, parse_date};
pub use identifiers::{VehicleId, BookingId, ModificationId};
