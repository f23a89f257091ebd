//! Tax and travel record request types.

use serde::{Deserialize, Serialize};
use traveltax_store::model::{NewTaxRate, NewTravelDestination};
use validator::Validate;

/// Request payload for creating a tax record.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTax {
    /// Province name, the unique lookup key.
    #[validate(length(min = 1, max = 128))]
    pub province: String,

    /// Tax reduction in percent.
    #[validate(range(min = 0.0, max = 100.0))]
    pub reduce_tax_percent: f64,

    /// Whether the province is a secondary destination.
    #[serde(default)]
    pub is_secondary: bool,

    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub description: String,
}

impl CreateTax {
    /// Converts the request into insert data.
    pub fn into_model(self) -> NewTaxRate {
        NewTaxRate {
            province: self.province,
            reduce_tax_percent: self.reduce_tax_percent,
            is_secondary: self.is_secondary,
            description: self.description,
        }
    }
}

/// Request payload for creating a travel record.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTravel {
    /// Province name, the unique lookup key.
    #[validate(length(min = 1, max = 128))]
    pub province: String,

    /// Free-form description.
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub description: String,

    /// Tax reduction in percent.
    #[validate(range(min = 0.0, max = 100.0))]
    pub tax_reduction: f64,

    /// Whether the province is a secondary destination.
    #[serde(default)]
    pub is_secondary: bool,
}

impl CreateTravel {
    /// Converts the request into insert data.
    pub fn into_model(self) -> NewTravelDestination {
        NewTravelDestination {
            province: self.province,
            description: self.description,
            tax_reduction: self.tax_reduction,
            is_secondary: self.is_secondary,
        }
    }
}
