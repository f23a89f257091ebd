//! Access token issuing.

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Header, encode};
use uuid::Uuid;

use super::{AccessClaims, AccessToken, SessionKeys, TOKEN_TYPE_BEARER};
use crate::utility::tracing_targets::TRACING_TARGET_TOKENS as TRACING_TARGET;
use crate::{Error, Result};

/// Signs access tokens with the configured session keys.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    keys: SessionKeys,
}

impl TokenIssuer {
    /// Creates a new issuer over the given keys.
    pub fn new(keys: SessionKeys) -> Self {
        Self { keys }
    }

    /// Issues a token for `subject`, valid for `ttl` or the configured
    /// default lifetime.
    ///
    /// A zero `ttl` produces a token that expires as soon as the clock moves
    /// past the issue second.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty subject, a negative `ttl`, or a signing
    /// failure.
    pub fn issue(&self, subject: &str, ttl: Option<SignedDuration>) -> Result<AccessToken> {
        self.issue_at(subject, ttl, Timestamp::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Option<SignedDuration>,
        now: Timestamp,
    ) -> Result<AccessToken> {
        if subject.is_empty() {
            return Err(Error::auth("Token subject must not be empty"));
        }

        let ttl = ttl.unwrap_or_else(|| self.keys.default_ttl());
        if ttl.is_negative() {
            return Err(Error::auth("Token lifetime must not be negative"));
        }

        let expires_at = now
            .checked_add(ttl)
            .map_err(|e| Error::auth("Token lifetime is out of range").with_source(e))?;

        let claims = AccessClaims {
            sub: Some(subject.to_owned()),
            iat: now.as_second(),
            exp: expires_at.as_second(),
            jti: Uuid::new_v4(),
        };

        let header = Header::new(self.keys.algorithm());
        let token = encode(&header, &claims, self.keys.encoding_key()).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                token_id = %claims.jti,
                "failed to sign access token"
            );
            Error::auth("Failed to sign access token").with_source(e)
        })?;

        tracing::debug!(
            target: TRACING_TARGET,
            token_id = %claims.jti,
            expires_at = claims.exp,
            "access token issued"
        );

        Ok(AccessToken {
            token,
            token_type: TOKEN_TYPE_BEARER,
            token_id: claims.jti,
            issued_at: now,
            expires_at,
        })
    }
}
