use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{NewTaxRate, NewTravelDestination};
use crate::{StoreError, StoreResult, TRACING_TARGET_CLIENT};

/// Seed document for the province tables.
///
/// ```json
/// {
///   "taxes": [{ "province": "Bali", "reduce_tax_percent": 10.0 }],
///   "travels": [{ "province": "Bali", "tax_reduction": 5.0 }]
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    /// Tax records to insert.
    #[serde(default)]
    pub taxes: Vec<NewTaxRate>,
    /// Travel records to insert.
    #[serde(default)]
    pub travels: Vec<NewTravelDestination>,
}

impl SeedData {
    /// Reads and parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Seed`] if the file cannot be read or is not a
    /// valid seed document.
    pub async fn load(path: &Path) -> StoreResult<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            path = %path.display(),
            "Loading seed data"
        );

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            tracing::error!(target: TRACING_TARGET_CLIENT, error = %e, path = %path.display(), "Failed to read seed file");
            StoreError::Seed {
                path: path.to_path_buf(),
                source: Box::new(e),
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(target: TRACING_TARGET_CLIENT, error = %e, path = %path.display(), "Failed to parse seed file");
            StoreError::Seed {
                path: path.to_path_buf(),
                source: Box::new(e),
            }
        })
    }
}
