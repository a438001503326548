//! Ledger domain errors

use core_kernel::{Amount, MoneyError};
use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Debits and credits of an action list differ
    #[error("Unbalanced actions: debits={debits}, credits={credits}")]
    UnbalancedActions {
        debits: Amount,
        credits: Amount,
    },

    #[error(transparent)]
    Money(#[from] MoneyError),
}
