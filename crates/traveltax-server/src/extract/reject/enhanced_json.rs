use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json as AxumJson, Request};
use axum::response::{IntoResponse, Response};
use derive_more::{Deref, DerefMut, From};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{TRACING_TARGET, sanitize_error_message};
use crate::handler::{Error, ErrorKind};

/// JSON extractor and response that rejects with [`Error`].
///
/// Request bodies are limited by axum's default body limit (2 MB).
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Creates a new [`Json`] wrapper around the provided value.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let extractor = <AxumJson<T> as FromRequest<S>>::from_request(req, state).await;
        extractor.map(|x| Self::new(x.0)).map_err(Into::into)
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    #[inline]
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl From<JsonRejection> for Error<'static> {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            error = %rejection,
            "json body rejected"
        );

        match rejection {
            JsonRejection::JsonDataError(err) => ErrorKind::BadRequest
                .with_message("Invalid request data format")
                .with_context(sanitize_error_message(&err.body_text())),
            JsonRejection::JsonSyntaxError(err) => ErrorKind::BadRequest
                .with_message("Invalid JSON syntax in request body")
                .with_context(sanitize_error_message(&err.body_text())),
            JsonRejection::MissingJsonContentType(_) => ErrorKind::BadRequest
                .with_message("Invalid content type")
                .with_context("Expected Content-Type: application/json"),
            JsonRejection::BytesRejection(err) => ErrorKind::BadRequest
                .with_message("Failed to read request body")
                .with_context(sanitize_error_message(&err.body_text())),
            _ => ErrorKind::InternalServerError.with_message("Request processing failed"),
        }
    }
}
