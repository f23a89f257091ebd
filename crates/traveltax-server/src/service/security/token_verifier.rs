//! Access token verification.
//!
//! Verification is pure: it never consults storage. The signature is checked
//! before expiry, so a forged token is reported as invalid even when its
//! claimed expiry has passed.

use jiff::Timestamp;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;

use super::{AccessClaims, SessionKeys};
use crate::utility::tracing_targets::TRACING_TARGET_AUTHENTICATION as TRACING_TARGET;

/// Reason an access token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TokenError {
    /// Malformed token, bad signature, or wrong algorithm or key.
    #[error("token is invalid")]
    Invalid,
    /// Valid signature but the expiry has passed.
    #[error("token has expired")]
    Expired,
    /// Valid and unexpired but without a subject.
    #[error("token has no subject")]
    MissingSubject,
    /// The subject does not resolve to an account.
    #[error("token subject is unknown")]
    UnknownSubject,
}

impl TokenError {
    /// Returns the error as a short string for structured logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Expired => "expired",
            Self::MissingSubject => "missing_subject",
            Self::UnknownSubject => "unknown_subject",
        }
    }
}

/// Verifies access tokens against the configured session keys.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    keys: SessionKeys,
}

impl TokenVerifier {
    /// Creates a new verifier over the given keys.
    pub fn new(keys: SessionKeys) -> Self {
        Self { keys }
    }

    /// Verifies a token and returns its subject.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let claims = self.verify_claims(token)?;
        claims.sub.ok_or(TokenError::MissingSubject)
    }

    /// Verifies a token and returns all of its claims.
    #[inline]
    pub fn verify_claims(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.verify_at(token, Timestamp::now())
    }

    /// Verifies a token as if the current time were `now`.
    ///
    /// A token is accepted while `now` is at or before its expiry second.
    pub fn verify_at(&self, token: &str, now: Timestamp) -> Result<AccessClaims, TokenError> {
        let token_data = decode::<AccessClaims>(token, self.keys.decoding_key(), &self.keys.validation())
            .map_err(|e| {
                let error = match e.kind() {
                    JwtErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                };

                tracing::debug!(
                    target: TRACING_TARGET,
                    error = %e,
                    rejection = error.as_str(),
                    "access token rejected"
                );
                error
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            tracing::debug!(
                target: TRACING_TARGET,
                token_id = %claims.jti,
                expired_at = claims.exp,
                "access token expired"
            );
            return Err(TokenError::Expired);
        }

        if claims.subject().is_none() {
            tracing::debug!(
                target: TRACING_TARGET,
                token_id = %claims.jti,
                "access token has no subject"
            );
            return Err(TokenError::MissingSubject);
        }

        Ok(claims)
    }
}
