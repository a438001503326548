//! Dataset and report DTOs

use chrono::NaiveDate;
use core_kernel::temporal::lenient_date;
use core_kernel::{Amount, BookingId, ModificationId, VehicleId};
use domain_ledger::LedgerAction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetDocument {
    #[serde(alias = "cars")]
    pub vehicles: Vec<VehicleRecord>,
    #[serde(alias = "rentals")]
    pub bookings: Vec<BookingRecord>,
    #[serde(alias = "rental_modifications", default)]
    pub modifications: Vec<ModificationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub price_per_day: Amount,
    pub price_per_km: Amount,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingRecord {
    pub id: BookingId,
    #[serde(alias = "car_id")]
    pub vehicle_id: VehicleId,
    #[serde(with = "lenient_date")]
    pub start_date: NaiveDate,
    #[serde(with = "lenient_date")]
    pub end_date: NaiveDate,
    #[serde(alias = "distance_km")]
    pub distance: i64,
    #[serde(alias = "deductible_reduction_opted", default)]
    pub deductible_reduction: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModificationRecord {
    pub id: ModificationId,
    #[serde(alias = "rental_id")]
    pub booking_id: BookingId,
    #[serde(with = "lenient_date::option", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "lenient_date::option", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(alias = "distance_km", default)]
    pub distance: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModificationsReport {
    pub modifications: Vec<ModificationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModificationEntry {
    pub id: ModificationId,
    pub booking_id: BookingId,
    pub actions: Vec<LedgerAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingsReport {
    pub bookings: Vec<BookingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingEntry {
    pub id: BookingId,
    pub price: Amount,
    pub options: OptionsEntry,
    pub commission: CommissionEntry,
    pub actions: Vec<LedgerAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionsEntry {
    pub deductible_reduction: Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommissionEntry {
    pub insurance_fee: Amount,
    pub assistance_fee: Amount,
    pub platform_fee: Amount,
}
