//! Vehicles available for rent

use serde::Serialize;

use core_kernel::{Amount, VehicleId};
use crate::error::RentalError;

/// A rentable vehicle and its rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vehicle {
    id: VehicleId,
    price_per_day: Amount,
    price_per_km: Amount,
}

impl Vehicle {
    /// Creates a vehicle
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidRate` if either rate is negative
    pub fn new(id: VehicleId, price_per_day: Amount, price_per_km: Amount) -> Result<Self, RentalError> {
        if price_per_day.is_negative() {
            return Err(RentalError::InvalidRate {
                field: "price_per_day",
                value: price_per_day.minor(),
            });
        }
        if price_per_km.is_negative() {
            return Err(RentalError::InvalidRate {
                field: "price_per_km",
                value: price_per_km.minor(),
            });
        }

        Ok(Self {
            id,
            price_per_day,
            price_per_km,
        })
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn price_per_day(&self) -> Amount {
        self.price_per_day
    }

    pub fn price_per_km(&self) -> Amount {
        self.price_per_km
    }
}
