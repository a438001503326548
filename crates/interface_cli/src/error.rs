//! CLI error handling

use std::path::PathBuf;

use core_kernel::{BookingId, ModificationId, VehicleId};
use domain_ledger::LedgerError;
use domain_rental::RentalError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Booking {booking} references unknown vehicle {vehicle}")]
    UnknownVehicle {
        booking: BookingId,
        vehicle: VehicleId,
    },

    #[error("Modification {modification} references unknown booking {booking}")]
    UnknownBooking {
        modification: ModificationId,
        booking: BookingId,
    },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u64 },

    #[error(transparent)]
    Rental(#[from] RentalError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
