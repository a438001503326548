//! Allocation table
//!
//! One row per party, in output order. Each row names the party, the
//! direction money normally flows for it, and how to read its amount from a
//! [`PricingBreakdown`]. Both booking actions and modification deltas are
//! generated from this single table.

use core_kernel::{Amount, MoneyError};
use domain_rental::PricingBreakdown;

use crate::action::{Direction, Party};

/// How one party's share is derived from a breakdown
#[derive(Debug, Clone, Copy)]
pub struct AllocationRule {
    pub party: Party,
    pub base_direction: Direction,
    amount: fn(&PricingBreakdown) -> Result<Amount, MoneyError>,
}

impl AllocationRule {
    /// The signed, pre-normalization amount for a breakdown
    pub fn raw_amount(&self, breakdown: &PricingBreakdown) -> Result<Amount, MoneyError> {
        (self.amount)(breakdown)
    }

    /// The signed change in amount from `original` to `modified`
    pub fn raw_delta(
        &self,
        original: &PricingBreakdown,
        modified: &PricingBreakdown,
    ) -> Result<Amount, MoneyError> {
        self.raw_amount(modified)?
            .checked_sub(&self.raw_amount(original)?)
    }
}

fn driver_amount(b: &PricingBreakdown) -> Result<Amount, MoneyError> {
    Ok(b.price_with_options())
}

fn owner_amount(b: &PricingBreakdown) -> Result<Amount, MoneyError> {
    Ok(b.owner_share())
}

fn insurance_amount(b: &PricingBreakdown) -> Result<Amount, MoneyError> {
    Ok(b.insurance_fee())
}

fn assistance_amount(b: &PricingBreakdown) -> Result<Amount, MoneyError> {
    Ok(b.assistance_fee())
}

// The deductible reduction option is revenue for the platform.
fn platform_amount(b: &PricingBreakdown) -> Result<Amount, MoneyError> {
    b.platform_fee().checked_add(&b.deductible_reduction_fee())
}

/// The ordered allocation of a rental price among its parties
pub const ALLOCATION_TABLE: [AllocationRule; 5] = [
    AllocationRule {
        party: Party::Driver,
        base_direction: Direction::Debit,
        amount: driver_amount,
    },
    AllocationRule {
        party: Party::Owner,
        base_direction: Direction::Credit,
        amount: owner_amount,
    },
    AllocationRule {
        party: Party::Insurance,
        base_direction: Direction::Credit,
        amount: insurance_amount,
    },
    AllocationRule {
        party: Party::Assistance,
        base_direction: Direction::Credit,
        amount: assistance_amount,
    },
    AllocationRule {
        party: Party::Platform,
        base_direction: Direction::Credit,
        amount: platform_amount,
    },
];
