#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging.

/// Tracing target for store initialization and seeding.
///
/// Use this target for logging store creation, configuration and seed loading.
pub const TRACING_TARGET_CLIENT: &str = "traveltax_store::client";

/// Tracing target for repository operations.
///
/// Use this target for logging inserts, lookups and their failures.
pub const TRACING_TARGET_QUERY: &str = "traveltax_store::queries";

mod client;
pub mod model;
pub mod query;

use std::borrow::Cow;
use std::path::PathBuf;

pub use crate::client::{MemoryStore, SeedData, StoreConfig, StoreConnection};

/// Type-erased error type for seed loading failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for all store operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "store errors should be handled appropriately"]
pub enum StoreError {
    /// A record with the same unique key already exists.
    #[error("{resource} '{key}' already exists")]
    Conflict {
        /// Table the conflict occurred in.
        resource: &'static str,
        /// Offending unique key.
        key: String,
    },

    /// The record addressed by the operation does not exist.
    #[error("{resource} '{key}' not found")]
    NotFound {
        /// Table the lookup targeted.
        resource: &'static str,
        /// Key that was looked up.
        key: String,
    },

    /// The record violates a field constraint.
    #[error("Validation error: {0}")]
    Validation(Cow<'static, str>),

    /// The seed document could not be read or parsed.
    #[error("Failed to load seed data from {}: {source}", path.display())]
    Seed {
        /// Path of the seed document.
        path: PathBuf,
        /// Underlying I/O or parse error.
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    /// Creates a new conflict error.
    pub fn conflict(resource: &'static str, key: impl Into<String>) -> Self {
        Self::Conflict {
            resource,
            key: key.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found(resource: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            key: key.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns the table name this error relates to, if any.
    pub fn resource(&self) -> Option<&'static str> {
        match self {
            Self::Conflict { resource, .. } | Self::NotFound { resource, .. } => Some(resource),
            Self::Validation(_) | Self::Seed { .. } => None,
        }
    }
}

/// Specialized [`Result`] type for store operations.
pub type StoreResult<T, E = StoreError> = Result<T, E>;
