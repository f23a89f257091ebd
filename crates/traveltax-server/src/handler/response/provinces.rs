//! Tax and travel record response types.

use serde::{Deserialize, Serialize};
use traveltax_store::model;

/// Tax reduction record for a province.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    pub id: i64,
    pub province: String,
    pub reduce_tax_percent: f64,
    pub is_secondary: bool,
    pub description: String,
}

impl Tax {
    /// Builds the response from a stored record.
    pub fn from_model(tax: model::TaxRate) -> Self {
        Self {
            id: tax.id,
            province: tax.province,
            reduce_tax_percent: tax.reduce_tax_percent,
            is_secondary: tax.is_secondary,
            description: tax.description,
        }
    }
}

/// Travel incentive record for a province.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Travel {
    pub id: i64,
    pub province: String,
    pub description: String,
    pub tax_reduction: f64,
    pub is_secondary: bool,
}

impl Travel {
    /// Builds the response from a stored record.
    pub fn from_model(travel: model::TravelDestination) -> Self {
        Self {
            id: travel.id,
            province: travel.province,
            description: travel.description,
            tax_reduction: travel.tax_reduction,
            is_secondary: travel.is_secondary,
        }
    }
}

/// List of tax records.
pub type Taxes = Vec<Tax>;

/// List of travel records.
pub type Travels = Vec<Travel>;
