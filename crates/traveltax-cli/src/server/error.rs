//! Server error types.

use std::io;

use thiserror::Error;

/// Result type for server operations.
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Error type for server startup and runtime failures.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Server configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to bind to the specified address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Runtime server error.
    #[error("Runtime error: {0}")]
    Runtime(#[source] io::Error),
}

impl ServerError {
    /// Provides a human-readable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig(_) => Some("Check the command-line flags and environment variables"),
            Self::BindError { source, .. } => match source.kind() {
                io::ErrorKind::PermissionDenied => {
                    Some("Try using a port above 1024 or run with appropriate privileges")
                }
                io::ErrorKind::AddrInUse => Some(
                    "The port is already in use. Try a different port or stop the conflicting service",
                ),
                io::ErrorKind::AddrNotAvailable => {
                    Some("The address is not available. Check network interface configuration")
                }
                _ => None,
            },
            Self::Runtime(_) => None,
        }
    }
}
