//! Application state and dependency injection.

mod config;
mod security;

use traveltax_store::MemoryStore;

pub use crate::service::config::ServiceConfig;
pub use crate::service::security::{
    AccessClaims, AccessToken, CredentialError, PasswordHasher, SessionKeys, SessionKeysConfig,
    TOKEN_TYPE_BEARER, TokenError, TokenIssuer, TokenVerifier,
};
// Re-export error types from crate root for convenience
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    // External services:
    pub store: MemoryStore,

    // Internal services:
    pub password_hasher: PasswordHasher,
    pub session_keys: SessionKeys,
    pub token_issuer: TokenIssuer,
    pub token_verifier: TokenVerifier,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Builds the signing keys and opens the store. Any failure here is
    /// meant to abort startup.
    pub async fn from_config(service_config: &ServiceConfig) -> Result<Self> {
        let session_keys = service_config.load_session_keys()?;
        let store = service_config.open_store().await?;

        tracing::info!(
            target: crate::TRACING_TARGET_SERVICE,
            algorithm = ?session_keys.algorithm(),
            token_ttl_secs = session_keys.default_ttl().as_secs(),
            "service state initialized"
        );

        Ok(Self::new(store, session_keys))
    }

    /// Assembles application state from an existing store and keys.
    pub fn new(store: MemoryStore, session_keys: SessionKeys) -> Self {
        Self {
            store,

            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(session_keys.clone()),
            token_verifier: TokenVerifier::new(session_keys.clone()),
            session_keys,
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(store: MemoryStore);

// Internal services:
impl_di!(password_hasher: PasswordHasher);
impl_di!(session_keys: SessionKeys);
impl_di!(token_issuer: TokenIssuer);
impl_di!(token_verifier: TokenVerifier);
