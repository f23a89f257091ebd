use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path as AxumPath};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use super::{TRACING_TARGET, sanitize_error_message};
use crate::handler::{Error, ErrorKind};

/// Path parameter extractor that rejects with [`Error`].
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    /// Creates a new instance of [`Path`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner path parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extractor =
            <AxumPath<T> as FromRequestParts<S>>::from_request_parts(parts, state).await;
        extractor.map(|x| Self(x.0)).map_err(Into::into)
    }
}

impl From<PathRejection> for Error<'static> {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            error = %rejection,
            "path parameters rejected"
        );

        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => ErrorKind::BadRequest
                .with_message("Invalid path parameter format")
                .with_context(sanitize_error_message(&err.body_text())),
            PathRejection::MissingPathParams(err) => ErrorKind::MissingPathParam
                .with_context(sanitize_error_message(&err.body_text())),
            _ => ErrorKind::InternalServerError.with_message("Path processing failed"),
        }
    }
}
