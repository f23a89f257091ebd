//! Middleware configuration for the HTTP server.

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};
use traveltax_server::middleware::RecoveryConfig;

use crate::TRACING_TARGET_CONFIG;

/// Maximum accepted request timeout in seconds.
const MAX_REQUEST_TIMEOUT: u64 = 300;

/// HTTP middleware configuration.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Recovery middleware configuration.
    ///
    /// Controls the request timeout.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,
}

impl MiddlewareConfig {
    /// Validates the request timeout range.
    pub fn validate(&self) -> AnyhowResult<()> {
        let timeout = self.recovery.request_timeout;
        if timeout == 0 || timeout > MAX_REQUEST_TIMEOUT {
            return Err(anyhow!(
                "Request timeout {timeout} seconds is invalid. Must be between 1 and {MAX_REQUEST_TIMEOUT} seconds."
            ));
        }

        Ok(())
    }

    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            request_timeout_secs = self.recovery.request_timeout,
            "recovery configuration"
        );
    }
}
