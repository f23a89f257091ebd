//! Claims carried by access tokens and the issued token envelope.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token type reported to clients alongside every access token.
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Claims signed into every access token.
///
/// | Claim | Meaning |
/// |-------|---------|
/// | `sub` | username of the account |
/// | `iat` | issue time, Unix seconds |
/// | `exp` | expiry time, Unix seconds |
/// | `jti` | random token id, used for log correlation only |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (username). Missing or empty subjects are rejected on
    /// verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issued at.
    pub iat: i64,
    /// Expiration time.
    pub exp: i64,
    /// Token identifier.
    #[serde(default = "Uuid::nil")]
    pub jti: Uuid,
}

impl AccessClaims {
    /// Returns the subject if present and non-empty.
    #[inline]
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|sub| !sub.is_empty())
    }

    /// Returns `true` once `now` is strictly past the expiry second.
    #[inline]
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now.as_second() > self.exp
    }
}

/// Signed access token returned by the issuer.
#[derive(Clone)]
pub struct AccessToken {
    /// Compact JWS token string.
    pub token: String,
    /// Always [`TOKEN_TYPE_BEARER`].
    pub token_type: &'static str,
    /// Token id of the signed claims.
    pub token_id: Uuid,
    /// Time the token was issued.
    pub issued_at: Timestamp,
    /// Time after which the token is rejected.
    pub expires_at: Timestamp,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("token_id", &self.token_id)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}
