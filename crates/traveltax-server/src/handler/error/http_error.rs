//! Handler error: an [`ErrorKind`] plus optional per-call overrides.

use std::borrow::Cow;
use std::fmt;

use axum::response::{IntoResponse, Response};

use crate::handler::response::ErrorResponse;

/// Error returned by handlers and extractors.
///
/// The kind picks the status code and the default body; `message`,
/// `resource` and `context` override or extend that body when rendered.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error<'a> {
    kind: ErrorKind,
    message: Option<Cow<'a, str>>,
    resource: Option<Cow<'a, str>>,
    context: Option<Cow<'a, str>>,
}

impl Error<'static> {
    /// Creates an error that renders the default body of `kind`.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            resource: None,
            context: None,
        }
    }
}

impl<'a> Error<'a> {
    /// Replaces the client-visible message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Names the resource the error is about, e.g. `tax` or `account`.
    #[inline]
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Adds a detail line for the client.
    #[inline]
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    #[inline]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Builds the JSON body this error renders to.
    pub fn to_response(&self) -> ErrorResponse<'_> {
        let mut response = self.kind.response();

        if let Some(message) = self.message() {
            response = response.with_message(message);
        }
        if let Some(resource) = self.resource() {
            response = response.with_resource(resource);
        }
        if let Some(context) = self.context() {
            response = response.with_context(context);
        }

        response
    }
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.to_response();
        write!(f, "{} {}: {}", response.status.as_u16(), response.name, response.message)?;

        if let Some(resource) = &response.resource {
            write!(f, " ({resource})")?;
        }
        if let Some(context) = &response.context {
            write!(f, ": {context}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error<'_> {}

impl IntoResponse for Error<'_> {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}

impl From<ErrorKind> for Error<'static> {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// [`Result`](std::result::Result) alias for handlers and extractors.
pub type Result<T, E = Error<'static>> = std::result::Result<T, E>;

/// Error conditions the HTTP layer reports, one status code each.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400, path parameter missing or unparsable.
    MissingPathParam,
    /// 400, body or form failed validation.
    BadRequest,
    /// 401, no bearer token in the request.
    MissingAuthToken,
    /// 401, credentials or token rejected.
    Unauthorized,
    /// 404
    NotFound,
    /// 409, unique key already taken.
    Conflict,
    /// 500
    InternalServerError,
}

impl ErrorKind {
    #[inline]
    pub fn into_error(self) -> Error<'static> {
        Error::new(self)
    }

    #[inline]
    pub fn with_message<'a>(self, message: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_message(message)
    }

    #[inline]
    pub fn with_resource<'a>(self, resource: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_resource(resource)
    }

    #[inline]
    pub fn with_context<'a>(self, context: impl Into<Cow<'a, str>>) -> Error<'a> {
        Error::new(self).with_context(context)
    }

    /// Returns the default body, which also carries the status code.
    pub fn response(self) -> ErrorResponse<'static> {
        match self {
            Self::MissingPathParam => ErrorResponse::MISSING_PATH_PARAM,
            Self::BadRequest => ErrorResponse::BAD_REQUEST,
            Self::MissingAuthToken => ErrorResponse::MISSING_AUTH_TOKEN,
            Self::Unauthorized => ErrorResponse::UNAUTHORIZED,
            Self::NotFound => ErrorResponse::NOT_FOUND,
            Self::Conflict => ErrorResponse::CONFLICT,
            Self::InternalServerError => ErrorResponse::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.response().name)
    }
}

impl IntoResponse for ErrorKind {
    #[inline]
    fn into_response(self) -> Response {
        self.response().into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use super::*;

    #[test]
    fn bare_kind_renders_default_body() {
        let error = ErrorKind::InternalServerError.into_error();
        let response = error.to_response();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.name, "internal_server_error");
        assert!(response.resource.is_none());
    }

    #[test]
    fn message_replaces_default() {
        let error = ErrorKind::NotFound.with_message("Tax info not found");
        assert_eq!(error.to_response().message, "Tax info not found");
    }

    #[test]
    fn error_builder_chaining() {
        let error = ErrorKind::Conflict
            .with_message("Province already exists")
            .with_resource("tax")
            .with_context("Nan");

        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.message(), Some("Province already exists"));
        assert_eq!(error.resource(), Some("tax"));
        assert_eq!(error.context(), Some("Nan"));
    }

    #[test]
    fn std_fmt_display() {
        let error = ErrorKind::NotFound
            .with_message("Travel info not found")
            .with_resource("travel");

        let display = error.to_string();
        assert!(display.contains("not_found"));
        assert!(display.contains("404"));
        assert!(display.contains("Travel info not found"));
        assert!(display.contains("travel"));
    }

    #[test]
    fn borrowed_context_renders() {
        let province = String::from("Loei");
        let error = ErrorKind::NotFound.with_context(province.as_str());

        assert_eq!(error.to_response().context.as_deref(), Some("Loei"));
    }

    #[test]
    fn unauthorized_kinds_carry_bearer_challenge() {
        for kind in [ErrorKind::MissingAuthToken, ErrorKind::Unauthorized] {
            let response = kind.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(
                response.headers().get(header::WWW_AUTHENTICATE).map(|v| v.as_bytes()),
                Some(b"Bearer".as_slice())
            );
        }
    }

    #[test]
    fn other_kinds_have_no_challenge() {
        let kinds = [
            ErrorKind::MissingPathParam,
            ErrorKind::BadRequest,
            ErrorKind::NotFound,
            ErrorKind::Conflict,
            ErrorKind::InternalServerError,
        ];

        for kind in kinds {
            let response = kind.into_response();
            assert!(response.status().as_u16() >= 400);
            assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
        }
    }
}
