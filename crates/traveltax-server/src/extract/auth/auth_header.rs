//! Bearer token extraction and verification.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use axum_extra::typed_header::TypedHeaderRejectionReason;
use derive_more::Deref;

use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{AccessClaims, TokenVerifier};

/// Verified claims of the request's bearer token.
///
/// Only checks the token itself. Use [`AuthState`] when the subject must
/// still exist as an account.
///
/// A missing or non-bearer `Authorization` header is rejected as
/// [`ErrorKind::MissingAuthToken`]; any token rejection as
/// [`ErrorKind::Unauthorized`].
///
/// [`AuthState`]: crate::extract::AuthState
#[must_use]
#[derive(Debug, Clone, Deref, PartialEq, Eq)]
pub struct AuthHeader(pub AccessClaims);

impl AuthHeader {
    /// Consumes this header and returns the verified claims.
    #[inline]
    pub fn into_claims(self) -> AccessClaims {
        self.0
    }

    /// Returns the token subject. Always non-empty for a verified token.
    #[inline]
    pub fn subject(&self) -> &str {
        self.0.subject().unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for AuthHeader
where
    S: Sync + Send,
    TokenVerifier: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth_header) = parts.extensions.get::<Self>() {
            return Ok(auth_header.clone());
        }

        type AuthBearerHeader = TypedHeader<Authorization<Bearer>>;
        let bearer_header = match AuthBearerHeader::from_request_parts(parts, state).await {
            Ok(bearer_header) => bearer_header,
            Err(rejection) => {
                let reason = match rejection.reason() {
                    TypedHeaderRejectionReason::Missing => "missing authorization header",
                    _ => "authorization header is not a bearer token",
                };

                tracing::debug!(
                    target: TRACING_TARGET_AUTHENTICATION,
                    reason = reason,
                    "bearer token not supplied"
                );
                return Err(ErrorKind::MissingAuthToken.into_error());
            }
        };

        let verifier = TokenVerifier::from_ref(state);
        let claims = verifier.verify_claims(bearer_header.token())?;

        let auth_header = Self(claims);
        parts.extensions.insert(auth_header.clone());
        Ok(auth_header)
    }
}
