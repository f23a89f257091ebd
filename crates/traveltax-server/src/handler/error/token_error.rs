//! Token rejection to HTTP error conversion.
//!
//! Every rejection renders the same client-facing body; the specific reason
//! only reaches the logs.

use crate::TRACING_TARGET_AUTHENTICATION;
use crate::handler::{Error, ErrorKind};
use crate::service::TokenError;

impl From<TokenError> for Error<'static> {
    fn from(error: TokenError) -> Self {
        tracing::info!(
            target: TRACING_TARGET_AUTHENTICATION,
            reason = error.as_str(),
            "bearer token rejected"
        );

        ErrorKind::Unauthorized.into_error()
    }
}
