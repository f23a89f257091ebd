//! HTTP server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Default listening port.
const DEFAULT_PORT: u16 = 8000;

/// Maximum accepted shutdown timeout in seconds.
const MAX_SHUTDOWN_TIMEOUT: u64 = 300;

/// HTTP server configuration.
///
/// # Environment Variables
///
/// - `HOST` - Server host address (default: 127.0.0.1)
/// - `PORT` - Server port (default: 8000, valid range: 1024-65535)
/// - `SHUTDOWN_TIMEOUT` - Graceful shutdown timeout in seconds (default: 30, max: 300)
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    ///
    /// Use "127.0.0.1" for localhost only, "0.0.0.0" for all interfaces.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// TCP port number for the server to listen on.
    ///
    /// Must be in the range 1024-65535.
    #[arg(short = 'p', long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Maximum time in seconds to wait for in-flight requests on shutdown.
    ///
    /// Connections still open afterwards are dropped. Valid range: 1-300 seconds.
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl ServerConfig {
    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the port is below 1024 or the shutdown timeout is
    /// outside 1-300 seconds.
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.port < 1024 {
            return Err(anyhow!(
                "Port {} is below 1024. Use ports 1024-65535 to avoid requiring root privileges.",
                self.port
            ));
        }

        if self.shutdown_timeout == 0 || self.shutdown_timeout > MAX_SHUTDOWN_TIMEOUT {
            return Err(anyhow!(
                "Shutdown timeout {} seconds is invalid. Must be between 1 and {MAX_SHUTDOWN_TIMEOUT} seconds.",
                self.shutdown_timeout
            ));
        }

        Ok(())
    }

    /// Returns the complete socket address for server binding.
    #[must_use]
    pub const fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the graceful shutdown timeout as a `Duration`.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// Returns whether the server is configured to bind to all interfaces.
    #[must_use]
    pub const fn binds_to_all_interfaces(&self) -> bool {
        match self.host {
            IpAddr::V4(addr) => addr.is_unspecified(),
            IpAddr::V6(addr) => addr.is_unspecified(),
        }
    }

    /// Logs server configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            host = %self.host,
            port = self.port,
            shutdown_timeout_secs = self.shutdown_timeout,
            "server configuration"
        );
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            shutdown_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.binds_to_all_interfaces());
    }

    #[test]
    fn reject_privileged_ports() {
        let config = ServerConfig {
            port: 80,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_invalid_shutdown_timeouts() {
        let mut config = ServerConfig::default();

        config.shutdown_timeout = 0;
        assert!(config.validate().is_err());

        config.shutdown_timeout = 301;
        assert!(config.validate().is_err());

        config.shutdown_timeout = 300;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_addr_returns_correct_socket() {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            ..ServerConfig::default()
        };
        let addr = config.server_addr();
        assert!(config.binds_to_all_interfaces());
        assert_eq!(addr.port(), 8000);
    }
}
