use std::path::{Path, PathBuf};

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Configuration for the in-memory store.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct StoreConfig {
    /// Path to a JSON document used to seed the province tables
    #[cfg_attr(feature = "config", arg(long = "seed-path", env = "SEED_PATH"))]
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Sets the seed document path.
    pub fn with_seed_path(mut self, path: impl AsRef<Path>) -> Self {
        self.seed_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Returns the seed document path, if configured.
    #[inline]
    pub fn seed_path(&self) -> Option<&Path> {
        self.seed_path.as_deref()
    }
}
