//! Per-province travel incentive records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Travel incentive offered for a province.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelDestination {
    /// Unique record identifier.
    pub id: i64,
    /// Province name, the exact lookup key.
    pub province: String,
    /// Free-form description.
    pub description: String,
    /// Tax reduction in percent (0 to 100).
    pub tax_reduction: f64,
    /// Whether the province is a secondary destination.
    pub is_secondary: bool,
    /// Timestamp when the record was created.
    pub created_at: Timestamp,
}

/// Data for creating a new travel record.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTravelDestination {
    pub province: String,
    #[serde(default)]
    pub description: String,
    pub tax_reduction: f64,
    #[serde(default)]
    pub is_secondary: bool,
}

impl NewTravelDestination {
    pub(crate) fn into_travel_destination(self, id: i64) -> TravelDestination {
        TravelDestination {
            id,
            province: self.province,
            description: self.description,
            tax_reduction: self.tax_reduction,
            is_secondary: self.is_secondary,
            created_at: Timestamp::now(),
        }
    }
}
