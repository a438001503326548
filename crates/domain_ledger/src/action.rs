//! Ledger action types
//!
//! This module defines the parties of a rental and the single-party
//! debit/credit instructions emitted for them.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Amount;

/// A party involved in a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    /// The renter
    Driver,
    /// The vehicle owner
    Owner,
    /// The insurer
    Insurance,
    /// The roadside assistance provider
    Assistance,
    /// The platform operator
    Platform,
}

impl Party {
    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Driver => "driver",
            Party::Owner => "owner",
            Party::Insurance => "insurance",
            Party::Assistance => "assistance",
            Party::Platform => "platform",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a money flow relative to a party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The party pays
    Debit,
    /// The party receives
    Credit,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Debit => Direction::Credit,
            Direction::Credit => Direction::Debit,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Debit => f.write_str("debit"),
            Direction::Credit => f.write_str("credit"),
        }
    }
}

/// A single monetary instruction for one party
///
/// The amount is never negative; the sign of the flow is carried by the
/// direction alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LedgerAction {
    #[serde(rename = "who")]
    party: Party,
    #[serde(rename = "type")]
    direction: Direction,
    amount: Amount,
}

impl LedgerAction {
    /// Creates an action from a signed amount
    ///
    /// A negative amount flips the direction and keeps the magnitude.
    pub fn normalized(party: Party, direction: Direction, raw_amount: Amount) -> Self {
        if raw_amount.is_negative() {
            Self {
                party,
                direction: direction.opposite(),
                amount: raw_amount.abs(),
            }
        } else {
            Self {
                party,
                direction,
                amount: raw_amount,
            }
        }
    }

    /// Debits a party (a negative amount becomes a credit)
    pub fn debit(party: Party, amount: Amount) -> Self {
        Self::normalized(party, Direction::Debit, amount)
    }

    /// Credits a party (a negative amount becomes a debit)
    pub fn credit(party: Party, amount: Amount) -> Self {
        Self::normalized(party, Direction::Credit, amount)
    }

    pub fn party(&self) -> Party {
        self.party
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Amount seen from the party: positive when credited, negative when debited
    pub fn signed_amount(&self) -> Amount {
        match self.direction {
            Direction::Credit => self.amount,
            Direction::Debit => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount_keeps_direction() {
        let action = LedgerAction::credit(Party::Owner, Amount::from_minor(2100));

        assert_eq!(action.direction(), Direction::Credit);
        assert_eq!(action.amount(), Amount::from_minor(2100));
    }

    #[test]
    fn test_negative_amount_flips_direction() {
        let action = LedgerAction::credit(Party::Platform, Amount::from_minor(-50));

        assert_eq!(action.direction(), Direction::Debit);
        assert_eq!(action.amount(), Amount::from_minor(50));
        assert_eq!(action.signed_amount(), Amount::from_minor(-50));
    }

    #[test]
    fn test_zero_keeps_base_direction() {
        let action = LedgerAction::debit(Party::Driver, Amount::ZERO);
        assert_eq!(action.direction(), Direction::Debit);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Debit.opposite(), Direction::Credit);
        assert_eq!(Direction::Credit.opposite(), Direction::Debit);
    }
}
