//! Ledger Domain - Per-party allocation of rental prices
//!
//! This crate turns priced rentals into balanced debit/credit instructions
//! for the five parties of a rental: driver, owner, insurance, assistance
//! and platform.
//!
//! # Allocation
//!
//! | Party | Direction | Amount |
//! |---|---|---|
//! | driver | debit | price with options |
//! | owner | credit | total price - commission |
//! | insurance | credit | insurance fee |
//! | assistance | credit | assistance fee |
//! | platform | credit | platform fee + deductible reduction fee |
//!
//! Debits always equal credits, for a booking and for the delta between a
//! booking and its modification.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{actions_for_booking, actions_for_modification};
//!
//! let actions = actions_for_booking(&breakdown)?;
//! let deltas = actions_for_modification(&original, &modified)?;
//! ```

pub mod action;
pub mod allocation;
pub mod ledger;
pub mod error;

pub use action::{Direction, LedgerAction, Party};
pub use allocation::{AllocationRule, ALLOCATION_TABLE};
pub use ledger::{
    actions_for_booking, actions_for_modification, ensure_balanced, totals, LedgerTotals,
};
pub use error::LedgerError;
