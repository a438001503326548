//! Ledger action generation
//!
//! Converts a priced breakdown, or the change between two breakdowns, into
//! the ordered list of per-party actions described by the allocation table.
//!
//! # Invariants
//!
//! - One action per allocation row, in table order
//! - Every amount is non-negative
//! - Total debits equal total credits

use serde::Serialize;

use core_kernel::{Amount, MoneyError};
use domain_rental::PricingBreakdown;

use crate::action::{Direction, LedgerAction};
use crate::allocation::{AllocationRule, ALLOCATION_TABLE};
use crate::error::LedgerError;

/// Applies the allocation table with the given raw amount extractor
fn generate<F>(raw_amount: F) -> Result<Vec<LedgerAction>, LedgerError>
where
    F: Fn(&AllocationRule) -> Result<Amount, MoneyError>,
{
    ALLOCATION_TABLE
        .iter()
        .map(|rule| {
            let raw = raw_amount(rule)?;
            Ok(LedgerAction::normalized(rule.party, rule.base_direction, raw))
        })
        .collect()
}

/// Actions settling a booking
///
/// A negative allocation (for instance a platform share smaller than the
/// assistance fee) is emitted in the opposite direction and logged as a
/// warning.
///
/// # Errors
///
/// Returns `LedgerError::Money` if a share overflows
pub fn actions_for_booking(breakdown: &PricingBreakdown) -> Result<Vec<LedgerAction>, LedgerError> {
    generate(|rule| {
        let raw = rule.raw_amount(breakdown)?;
        if raw.is_negative() {
            tracing::warn!(
                party = %rule.party,
                raw_amount = %raw,
                "Negative allocation; emitting in the opposite direction"
            );
        }
        Ok(raw)
    })
}

/// Actions settling the change from `original` to `modified`
///
/// Deltas are taken on the signed amounts before normalization, so a party
/// whose share shrinks is settled in the opposite direction.
///
/// # Errors
///
/// Returns `LedgerError::Money` if a share or its change overflows
pub fn actions_for_modification(
    original: &PricingBreakdown,
    modified: &PricingBreakdown,
) -> Result<Vec<LedgerAction>, LedgerError> {
    generate(|rule| {
        let delta = rule.raw_delta(original, modified)?;
        tracing::debug!(party = %rule.party, delta = %delta, "Allocation delta");
        Ok(delta)
    })
}

/// Debit and credit totals of an action list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedgerTotals {
    pub debits: Amount,
    pub credits: Amount,
}

impl LedgerTotals {
    pub fn is_balanced(&self) -> bool {
        self.debits == self.credits
    }
}

/// Sums debits and credits
pub fn totals(actions: &[LedgerAction]) -> LedgerTotals {
    actions.iter().fold(LedgerTotals::default(), |mut totals, action| {
        match action.direction() {
            Direction::Debit => totals.debits += action.amount(),
            Direction::Credit => totals.credits += action.amount(),
        }
        totals
    })
}

/// Verifies that debits equal credits
///
/// # Errors
///
/// Returns `LedgerError::UnbalancedActions` with both totals otherwise
pub fn ensure_balanced(actions: &[LedgerAction]) -> Result<LedgerTotals, LedgerError> {
    let totals = totals(actions);
    if !totals.is_balanced() {
        return Err(LedgerError::UnbalancedActions {
            debits: totals.debits,
            credits: totals.credits,
        });
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Party;

    #[test]
    fn test_ensure_balanced_accepts_balanced_list() {
        let actions = vec![
            LedgerAction::debit(Party::Driver, Amount::from_minor(3000)),
            LedgerAction::credit(Party::Owner, Amount::from_minor(2100)),
            LedgerAction::credit(Party::Platform, Amount::from_minor(900)),
        ];

        let totals = ensure_balanced(&actions).unwrap();
        assert_eq!(totals.debits, Amount::from_minor(3000));
        assert_eq!(totals.credits, Amount::from_minor(3000));
    }

    #[test]
    fn test_ensure_balanced_rejects_unbalanced_list() {
        let actions = vec![
            LedgerAction::debit(Party::Driver, Amount::from_minor(3000)),
            LedgerAction::credit(Party::Owner, Amount::from_minor(2100)),
        ];

        assert_eq!(
            ensure_balanced(&actions),
            Err(LedgerError::UnbalancedActions {
                debits: Amount::from_minor(3000),
                credits: Amount::from_minor(2100),
            })
        );
    }

    #[test]
    fn test_empty_list_is_balanced() {
        assert!(totals(&[]).is_balanced());
    }
}
