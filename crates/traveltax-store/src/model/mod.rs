//! Record types for every table held by the store.
//!
//! Each table has a stored record type and a `New*` insert type. Records
//! receive their `id` and `created_at` on insert.

mod account;
mod tax_rate;
mod travel_destination;

pub use account::{Account, NewAccount};
pub use tax_rate::{NewTaxRate, TaxRate};
pub use travel_destination::{NewTravelDestination, TravelDestination};

use crate::{StoreError, StoreResult};

/// Checks the constraints shared by the province-keyed tables.
pub(crate) fn validate_province_record(province: &str, percent: f64) -> StoreResult<()> {
    if province.trim().is_empty() {
        return Err(StoreError::validation("province must not be empty"));
    }

    if !(0.0..=100.0).contains(&percent) {
        return Err(StoreError::validation(format!(
            "percentage must be between 0 and 100, got {percent}"
        )));
    }

    Ok(())
}
