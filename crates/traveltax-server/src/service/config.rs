#[cfg(any(test, feature = "config"))]
use clap::Args;
use serde::{Deserialize, Serialize};
use traveltax_store::{MemoryStore, StoreConfig};

use crate::service::{Result, SessionKeys, SessionKeysConfig};

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "config"), derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Access token signing configuration.
    #[cfg_attr(any(test, feature = "config"), clap(flatten))]
    pub session_keys: SessionKeysConfig,

    /// Storage configuration.
    #[cfg_attr(any(test, feature = "config"), clap(flatten))]
    #[serde(default)]
    pub store: StoreConfig,
}

impl ServiceConfig {
    /// Creates a new configuration with the given signing settings and an
    /// empty, unseeded store.
    pub fn new(session_keys: SessionKeysConfig) -> Self {
        Self {
            session_keys,
            store: StoreConfig::default(),
        }
    }

    /// Sets the storage configuration.
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Validates the configuration without loading any resources.
    pub fn validate(&self) -> Result<()> {
        self.session_keys.validate()
    }

    /// Opens the store and applies the seed document, if configured.
    pub async fn open_store(&self) -> Result<MemoryStore> {
        Ok(MemoryStore::from_config(&self.store).await?)
    }

    /// Builds the session keys.
    pub fn load_session_keys(&self) -> Result<SessionKeys> {
        SessionKeys::from_config(&self.session_keys)
    }
}
