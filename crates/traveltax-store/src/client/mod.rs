//! In-memory store client, configuration and seed loading.
//!
//! [`MemoryStore`] owns the tables and hands out [`StoreConnection`]s. The
//! repository traits in [`crate::query`] are implemented for the connection.

mod memory_store;
mod seed;
mod store_config;

pub use memory_store::{MemoryStore, StoreConnection};
pub use seed::SeedData;
pub use store_config::StoreConfig;
