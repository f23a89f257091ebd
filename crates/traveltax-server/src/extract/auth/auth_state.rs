//! Authenticated account extraction.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::Deref;
use traveltax_store::MemoryStore;
use traveltax_store::model::Account;
use traveltax_store::query::AccountRepository;

use super::AuthHeader;
use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, Result};
use crate::service::{TokenError, TokenVerifier};

/// Account that owns the request's bearer token.
///
/// Extraction verifies the token, then looks up its subject. A subject that
/// no longer matches an account is rejected as
/// [`TokenError::UnknownSubject`], which renders the same `401` as every
/// other token rejection. The result is cached for the rest of the request.
#[derive(Debug, Clone, Deref, PartialEq)]
pub struct AuthState(pub Account);

impl AuthState {
    /// Resolves verified claims to a stored account.
    pub async fn from_verified_header(auth_header: AuthHeader, store: &MemoryStore) -> Result<Self> {
        let mut conn = store.connection();
        let subject = auth_header.subject();

        match conn.find_account_by_username(subject).await? {
            Some(account) => {
                tracing::debug!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    account_id = account.id,
                    token_id = %auth_header.jti,
                    "request authenticated"
                );
                Ok(Self(account))
            }
            None => {
                tracing::debug!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    token_id = %auth_header.jti,
                    "token subject has no account"
                );
                Err(TokenError::UnknownSubject.into())
            }
        }
    }

    /// Returns the authenticated account.
    #[inline]
    pub fn account(&self) -> &Account {
        &self.0
    }

    /// Consumes the state and returns the authenticated account.
    #[inline]
    pub fn into_account(self) -> Account {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthState
where
    S: Sync + Send,
    TokenVerifier: FromRef<S>,
    MemoryStore: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth_state) = parts.extensions.get::<Self>() {
            return Ok(auth_state.clone());
        }

        let auth_header = AuthHeader::from_request_parts(parts, state).await?;
        let store = MemoryStore::from_ref(state);
        let auth_state = Self::from_verified_header(auth_header, &store).await?;

        parts.extensions.insert(auth_state.clone());
        Ok(auth_state)
    }
}
