use axum::extract::rejection::FormRejection;
use axum::extract::{Form as AxumForm, FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use super::{TRACING_TARGET, sanitize_error_message};
use crate::handler::{Error, ErrorKind};

/// Form extractor for `application/x-www-form-urlencoded` bodies that
/// rejects with [`Error`].
///
/// A missing field is reported by name:
///
/// ```rust,no_run
/// use serde::Deserialize;
/// use traveltax_server::extract::Form;
///
/// #[derive(Deserialize)]
/// struct LoginForm {
///     username: String,
///     password: String,
/// }
///
/// async fn login(Form(form): Form<LoginForm>) -> String {
///     form.username
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Form<T>(pub T);

impl<T> Form<T> {
    /// Creates a new [`Form`] wrapper around the provided form data.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner form data.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumForm::<T>::from_request(req, state).await {
            Ok(AxumForm(form)) => Ok(Form(form)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<FormRejection> for Error<'static> {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            error = %rejection,
            "form body rejected"
        );

        match rejection {
            FormRejection::FailedToDeserializeForm(err) => field_error(&err.body_text()),
            FormRejection::FailedToDeserializeFormBody(err) => field_error(&err.body_text()),
            FormRejection::InvalidFormContentType(_) => ErrorKind::BadRequest
                .with_message("Invalid content type")
                .with_context("Expected Content-Type: application/x-www-form-urlencoded"),
            FormRejection::BytesRejection(err) => ErrorKind::BadRequest
                .with_message("Failed to read request body")
                .with_context(sanitize_error_message(&err.body_text())),
            _ => ErrorKind::InternalServerError.with_message("Request processing failed"),
        }
    }
}

/// Names the missing field when serde reports one.
fn field_error(message: &str) -> Error<'static> {
    match extract_field_name_from_error(message) {
        Some(field) => ErrorKind::BadRequest
            .with_message("Missing required form field")
            .with_context(format!("The form field '{field}' is required")),
        None => ErrorKind::BadRequest
            .with_message("Invalid form field value")
            .with_context(sanitize_error_message(message)),
    }
}

/// Returns the field named in a serde "missing field `x`" message.
fn extract_field_name_from_error(message: &str) -> Option<&str> {
    let rest = &message[message.find("missing field")?..];
    let start = rest.find('`')? + 1;
    let len = rest[start..].find('`')?;
    Some(&rest[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_missing_field_name() {
        let message = "Failed to deserialize form body: missing field `password`";
        assert_eq!(extract_field_name_from_error(message), Some("password"));
        assert_eq!(extract_field_name_from_error("invalid type: map"), None);
    }
}
