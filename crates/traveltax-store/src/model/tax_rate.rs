//! Per-province tax reduction records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Tax reduction applied to travel in a province.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxRate {
    /// Unique record identifier.
    pub id: i64,
    /// Province name, the exact lookup key.
    pub province: String,
    /// Tax reduction in percent (0 to 100).
    pub reduce_tax_percent: f64,
    /// Whether the province is a secondary destination.
    pub is_secondary: bool,
    /// Free-form description.
    pub description: String,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for creating a new tax record.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTaxRate {
    pub province: String,
    pub reduce_tax_percent: f64,
    #[serde(default)]
    pub is_secondary: bool,
    #[serde(default)]
    pub description: String,
}

impl NewTaxRate {
    pub(crate) fn into_tax_rate(self, id: i64) -> TaxRate {
        TaxRate {
            id,
            province: self.province,
            reduce_tax_percent: self.reduce_tax_percent,
            is_secondary: self.is_secondary,
            description: self.description,
            created_at: Timestamp::now(),
        }
    }
}
