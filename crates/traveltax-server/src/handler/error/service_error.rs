//! Service error to HTTP error conversion.

use crate::handler::{Error, ErrorKind};

/// Tracing target for service error conversions.
const TRACING_TARGET: &str = "traveltax_server::handler::service";

impl From<crate::Error> for Error<'static> {
    fn from(error: crate::Error) -> Self {
        use crate::ErrorKind as ServiceErrorKind;

        tracing::error!(
            target: TRACING_TARGET,
            error = %error,
            error_kind = error.kind().as_str(),
            "service operation failed"
        );

        match error.kind() {
            ServiceErrorKind::Auth => ErrorKind::Unauthorized.into_error(),
            ServiceErrorKind::Config | ServiceErrorKind::Store | ServiceErrorKind::Internal => {
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_details_are_not_exposed() {
        let error = Error::from(crate::Error::internal("password_hasher", "rng failure"));
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert!(error.message().is_none());
        assert!(error.context().is_none());
    }

    #[test]
    fn auth_maps_to_401() {
        let error = Error::from(crate::Error::auth("Token subject must not be empty"));
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
    }
}
