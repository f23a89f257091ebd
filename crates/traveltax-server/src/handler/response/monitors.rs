//! Monitor response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Greeting returned by the root endpoint.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

impl Default for Welcome {
    fn default() -> Self {
        Self {
            message: "Welcome to the Travel Tax API".to_owned(),
        }
    }
}

/// Liveness status.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStatus {
    /// Whether the service can answer requests.
    pub is_healthy: bool,
    /// Timestamp when this status was generated.
    pub updated_at: Timestamp,
}

impl Default for MonitorStatus {
    fn default() -> Self {
        Self {
            is_healthy: true,
            updated_at: Timestamp::now(),
        }
    }
}
