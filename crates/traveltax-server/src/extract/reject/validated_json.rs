//! JSON extractor with `validator` checks applied after deserialization.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{Json, TRACING_TARGET};
use crate::handler::{Error, ErrorKind};

/// [`Json`] extractor that also runs [`Validate::validate`].
///
/// Validation failures become `400 Bad Request` with one sentence per
/// failing field, sorted by field name.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    /// Creates a new instance of [`ValidateJson`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self::new(data))
    }
}

type Params = HashMap<Cow<'static, str>, serde_json::Value>;

fn format_length_error(field: &str, params: &Params) -> String {
    let min = params.get("min").and_then(serde_json::Value::as_u64);
    let max = params.get("max").and_then(serde_json::Value::as_u64);

    match (min, max) {
        (Some(min), Some(max)) => {
            format!("Field '{field}' must be between {min} and {max} characters long")
        }
        (Some(min), None) => format!("Field '{field}' must be at least {min} characters long"),
        (None, Some(max)) => format!("Field '{field}' must be at most {max} characters long"),
        (None, None) => format!("Field '{field}' has invalid length"),
    }
}

fn format_range_error(field: &str, params: &Params) -> String {
    let min = params.get("min").and_then(serde_json::Value::as_f64);
    let max = params.get("max").and_then(serde_json::Value::as_f64);

    match (min, max) {
        (Some(min), Some(max)) => format!("Field '{field}' must be between {min} and {max}"),
        (Some(min), None) => format!("Field '{field}' must be at least {min}"),
        (None, Some(max)) => format!("Field '{field}' must be at most {max}"),
        (None, None) => format!("Field '{field}' is out of valid range"),
    }
}

fn format_validation_error(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return format!("Field '{field}': {message}");
    }

    match error.code.as_ref() {
        "length" => format_length_error(field, &error.params),
        "range" => format_range_error(field, &error.params),
        "required" => format!("Field '{field}' is required"),
        code => format!("Field '{field}' failed validation: {code}"),
    }
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = errors.field_errors().into_iter().collect::<Vec<_>>();
        field_errors.sort_by(|a, b| a.0.cmp(&b.0));

        let messages = field_errors
            .iter()
            .flat_map(|(field, errors)| {
                errors
                    .iter()
                    .map(move |error| format_validation_error(field, error))
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            target: TRACING_TARGET,
            errors = ?messages,
            "request validation failed"
        );

        let message = if messages.is_empty() {
            "Validation failed".to_owned()
        } else {
            messages.join(". ")
        };

        ErrorKind::BadRequest
            .with_message(message)
            .with_resource("request")
    }
}
