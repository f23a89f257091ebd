use std::fmt;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{SeedData, StoreConfig};
use crate::model::{Account, TaxRate, TravelDestination};
use crate::query::{TaxRepository, TravelRepository};
use crate::{StoreResult, TRACING_TARGET_CLIENT};

/// Rows of every table plus the id sequences.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub accounts: Vec<Account>,
    pub taxes: Vec<TaxRate>,
    pub travels: Vec<TravelDestination>,
    next_account_id: i64,
    next_tax_id: i64,
    next_travel_id: i64,
}

impl Tables {
    pub fn next_account_id(&mut self) -> i64 {
        self.next_account_id += 1;
        self.next_account_id
    }

    pub fn next_tax_id(&mut self) -> i64 {
        self.next_tax_id += 1;
        self.next_tax_id
    }

    pub fn next_travel_id(&mut self) -> i64 {
        self.next_travel_id += 1;
        self.next_travel_id
    }
}

/// Shared in-memory store.
///
/// Cloning is cheap and every clone observes the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        tracing::debug!(target: TRACING_TARGET_CLIENT, "Creating empty in-memory store");
        Self::default()
    }

    /// Creates a store from configuration, loading the seed document if one
    /// is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed document cannot be read or parsed, or if
    /// any seeded record violates a table constraint.
    #[tracing::instrument(skip(config), target = TRACING_TARGET_CLIENT)]
    pub async fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let this = Self::new();

        if let Some(path) = config.seed_path() {
            let seed = SeedData::load(path).await?;
            this.apply_seed(seed).await?;
        }

        Ok(this)
    }

    /// Inserts every record of the seed document.
    pub async fn apply_seed(&self, seed: SeedData) -> StoreResult<()> {
        let (taxes, travels) = (seed.taxes.len(), seed.travels.len());
        let mut conn = self.connection();

        for tax in seed.taxes {
            conn.create_tax(tax).await?;
        }

        for travel in seed.travels {
            conn.create_travel(travel).await?;
        }

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            taxes,
            travels,
            "Seeded province tables"
        );

        Ok(())
    }

    /// Returns a connection handle for repository operations.
    #[inline]
    pub fn connection(&self) -> StoreConnection {
        StoreConnection {
            tables: Arc::clone(&self.tables),
        }
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore").finish_non_exhaustive()
    }
}

/// Handle used to run repository operations against a [`MemoryStore`].
pub struct StoreConnection {
    tables: Arc<RwLock<Tables>>,
}

impl StoreConnection {
    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

impl fmt::Debug for StoreConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConnection").finish_non_exhaustive()
    }
}
