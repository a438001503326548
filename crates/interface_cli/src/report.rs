//! Report generation
//!
//! Reports are computed in full before anything is serialized, so an error
//! on any record produces no output at all.

use domain_ledger::{actions_for_booking, actions_for_modification, ensure_balanced};
use domain_rental::{resolve, PricingEngine};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::ReportKind;
use crate::dataset::ResolvedDataset;
use crate::dto::{
    BookingEntry, BookingsReport, CommissionEntry, ModificationEntry, ModificationsReport,
    OptionsEntry,
};
use crate::error::CliError;

/// Prices every booking and allocates it across the parties
#[instrument(skip(dataset, engine), fields(count = dataset.bookings().len()))]
pub fn bookings_report(
    dataset: &ResolvedDataset,
    engine: &PricingEngine,
) -> Result<BookingsReport, CliError> {
    info!("Generating bookings report");

    let bookings = dataset
        .bookings()
        .iter()
        .map(|booking| -> Result<BookingEntry, CliError> {
            let breakdown = booking.price(engine)?;
            let actions = actions_for_booking(&breakdown)?;
            ensure_balanced(&actions)?;

            Ok(BookingEntry {
                id: booking.id(),
                price: breakdown.total_price(),
                options: OptionsEntry {
                    deductible_reduction: breakdown.deductible_reduction_fee(),
                },
                commission: CommissionEntry {
                    insurance_fee: breakdown.insurance_fee(),
                    assistance_fee: breakdown.assistance_fee(),
                    platform_fee: breakdown.platform_fee(),
                },
                actions,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(bookings = bookings.len(), "Bookings report complete");
    Ok(BookingsReport { bookings })
}

/// Computes the delta actions of every modification against its booking
#[instrument(skip(dataset, engine), fields(count = dataset.modifications().len()))]
pub fn modifications_report(
    dataset: &ResolvedDataset,
    engine: &PricingEngine,
) -> Result<ModificationsReport, CliError> {
    info!("Generating modifications report");

    let modifications = dataset
        .modifications()
        .iter()
        .map(|modification| -> Result<ModificationEntry, CliError> {
            let original = dataset.booking(modification.booking_id).ok_or(
                CliError::UnknownBooking {
                    modification: modification.id,
                    booking: modification.booking_id,
                },
            )?;
            let effective = resolve(original, modification)?;
            let actions = actions_for_modification(
                &original.price(engine)?,
                &effective.price(engine)?,
            )?;
            ensure_balanced(&actions)?;

            Ok(ModificationEntry {
                id: modification.id,
                booking_id: modification.booking_id,
                actions,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(modifications = modifications.len(), "Modifications report complete");
    Ok(ModificationsReport { modifications })
}

/// Builds the requested report and serializes it to JSON
pub fn render(
    dataset: &ResolvedDataset,
    engine: &PricingEngine,
    kind: ReportKind,
    pretty: bool,
) -> Result<String, CliError> {
    match kind {
        ReportKind::Modifications => to_json(&modifications_report(dataset, engine)?, pretty),
        ReportKind::Bookings => to_json(&bookings_report(dataset, engine)?, pretty),
    }
}

fn to_json<T: Serialize>(report: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
