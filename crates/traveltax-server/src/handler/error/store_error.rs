//! Store error to HTTP error conversion.

use traveltax_store::StoreError;

use crate::handler::{Error, ErrorKind};

/// Tracing target for store error conversions.
const TRACING_TARGET: &str = "traveltax_server::handler::store";

impl From<StoreError> for Error<'static> {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Conflict { resource, ref key } => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    resource = resource,
                    key = %key,
                    "unique key conflict"
                );
                ErrorKind::Conflict
                    .with_message(error.to_string())
                    .with_resource(resource)
            }
            StoreError::NotFound { resource, ref key } => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    resource = resource,
                    key = %key,
                    "record not found"
                );
                ErrorKind::NotFound
                    .with_message(error.to_string())
                    .with_resource(resource)
            }
            StoreError::Validation(message) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    message = %message,
                    "record failed validation"
                );
                ErrorKind::BadRequest.with_context(message)
            }
            StoreError::Seed { .. } => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "seed error reached a request handler"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_409() {
        let error = Error::from(StoreError::conflict("tax", "Nan"));
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.resource(), Some("tax"));
        assert_eq!(error.message(), Some("tax 'Nan' already exists"));
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = Error::from(StoreError::not_found("travel", "Atlantis"));
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn validation_maps_to_400() {
        let error = Error::from(StoreError::validation("province must not be empty"));
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.context(), Some("province must not be empty"));
    }

    #[test]
    fn seed_maps_to_500() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = Error::from(StoreError::Seed {
            path: "seed.json".into(),
            source: Box::new(source),
        });
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
