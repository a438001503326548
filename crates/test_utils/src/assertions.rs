//! Custom Test Assertions
//!
//! Provides assertion helpers for ledger actions that report the whole
//! action list on failure.

use core_kernel::Amount;
use domain_ledger::{totals, Direction, LedgerAction, Party};

/// Asserts that total debits equal total credits
pub fn assert_balanced(actions: &[LedgerAction]) {
    let totals = totals(actions);
    assert!(
        totals.is_balanced(),
        "Actions are not balanced: debits={}, credits={}, actions={:?}",
        totals.debits,
        totals.credits,
        actions
    );
}

/// Asserts that no action carries a negative amount
pub fn assert_amounts_non_negative(actions: &[LedgerAction]) {
    for action in actions {
        assert!(
            !action.amount().is_negative(),
            "Negative amount for {}: {}",
            action.party(),
            action.amount()
        );
    }
}

/// Asserts that every action amount is zero
pub fn assert_all_zero(actions: &[LedgerAction]) {
    for action in actions {
        assert!(
            action.amount().is_zero(),
            "Expected zero amount for {}, got {} {}",
            action.party(),
            action.direction(),
            action.amount()
        );
    }
}

/// Asserts the parties appear once each, in allocation order
pub fn assert_party_order(actions: &[LedgerAction]) {
    let parties: Vec<Party> = actions.iter().map(|a| a.party()).collect();
    assert_eq!(
        parties,
        vec![
            Party::Driver,
            Party::Owner,
            Party::Insurance,
            Party::Assistance,
            Party::Platform,
        ],
        "Unexpected party order"
    );
}

/// Asserts the action for `party` has the given direction and amount
pub fn assert_action(actions: &[LedgerAction], party: Party, direction: Direction, amount: i64) {
    let action = actions
        .iter()
        .find(|a| a.party() == party)
        .unwrap_or_else(|| panic!("No action for {} in {:?}", party, actions));

    assert_eq!(
        (action.direction(), action.amount()),
        (direction, Amount::from_minor(amount)),
        "Unexpected action for {}",
        party
    );
}
