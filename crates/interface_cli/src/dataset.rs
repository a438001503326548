//! Dataset loading and referential integrity
//!
//! A [`Dataset`] is the raw JSON document. [`Dataset::resolve`] turns it into
//! domain bookings and modifications, failing on the first dangling
//! reference or duplicate id so that no report is produced from a
//! partially valid input.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use core_kernel::{BookingId, RentalPeriod, VehicleId};
use domain_rental::{Booking, BookingModification, Vehicle};
use tracing::debug;

use crate::dto::{BookingRecord, DatasetDocument, ModificationRecord, VehicleRecord};
use crate::error::CliError;

/// A parsed but not yet validated dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    document: DatasetDocument,
}

impl Dataset {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CliError> {
        let document = serde_json::from_reader(reader)?;
        Ok(Self { document })
    }

    pub fn from_json(json: &str) -> Result<Self, CliError> {
        let document = serde_json::from_str(json)?;
        Ok(Self { document })
    }

    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let file = File::open(path).map_err(|e| CliError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds domain entities, checking ids are unique and every reference
    /// points at a known record
    pub fn resolve(&self) -> Result<ResolvedDataset, CliError> {
        let vehicles = index_vehicles(&self.document.vehicles)?;

        let mut bookings = Vec::with_capacity(self.document.bookings.len());
        let mut booking_index = HashMap::with_capacity(self.document.bookings.len());
        for record in &self.document.bookings {
            let booking = build_booking(record, &vehicles)?;
            if booking_index.insert(record.id, bookings.len()).is_some() {
                return Err(CliError::DuplicateId {
                    kind: "booking",
                    id: record.id.value(),
                });
            }
            bookings.push(booking);
        }

        let mut seen = HashSet::with_capacity(self.document.modifications.len());
        let mut modifications = Vec::with_capacity(self.document.modifications.len());
        for record in &self.document.modifications {
            if !booking_index.contains_key(&record.booking_id) {
                return Err(CliError::UnknownBooking {
                    modification: record.id,
                    booking: record.booking_id,
                });
            }
            if !seen.insert(record.id) {
                return Err(CliError::DuplicateId {
                    kind: "modification",
                    id: record.id.value(),
                });
            }
            modifications.push(build_modification(record));
        }

        debug!(
            vehicles = vehicles.len(),
            bookings = bookings.len(),
            modifications = modifications.len(),
            "Dataset resolved"
        );

        Ok(ResolvedDataset {
            bookings,
            booking_index,
            modifications,
        })
    }
}

fn index_vehicles(records: &[VehicleRecord]) -> Result<HashMap<VehicleId, Vehicle>, CliError> {
    let mut vehicles = HashMap::with_capacity(records.len());
    for record in records {
        let vehicle = Vehicle::new(record.id, record.price_per_day, record.price_per_km)?;
        if vehicles.insert(record.id, vehicle).is_some() {
            return Err(CliError::DuplicateId {
                kind: "vehicle",
                id: record.id.value(),
            });
        }
    }
    Ok(vehicles)
}

fn build_booking(
    record: &BookingRecord,
    vehicles: &HashMap<VehicleId, Vehicle>,
) -> Result<Booking, CliError> {
    let vehicle = vehicles
        .get(&record.vehicle_id)
        .copied()
        .ok_or(CliError::UnknownVehicle {
            booking: record.id,
            vehicle: record.vehicle_id,
        })?;
    let period = RentalPeriod::new(record.start_date, record.end_date)
        .map_err(domain_rental::RentalError::from)?;

    let booking = Booking::builder()
        .id(record.id)
        .vehicle(vehicle)
        .period(period)
        .distance_km(record.distance)
        .deductible_reduction(record.deductible_reduction)
        .build()?;
    Ok(booking)
}

fn build_modification(record: &ModificationRecord) -> BookingModification {
    BookingModification {
        id: record.id,
        booking_id: record.booking_id,
        start_date: record.start_date,
        end_date: record.end_date,
        distance_km: record.distance,
    }
}

/// Bookings and modifications whose references are known to resolve
#[derive(Debug, Clone)]
pub struct ResolvedDataset {
    bookings: Vec<Booking>,
    booking_index: HashMap<BookingId, usize>,
    modifications: Vec<BookingModification>,
}

impl ResolvedDataset {
    /// Bookings in input order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Modifications in input order
    pub fn modifications(&self) -> &[BookingModification] {
        &self.modifications
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.booking_index.get(&id).and_then(|&i| self.bookings.get(i))
    }
}
