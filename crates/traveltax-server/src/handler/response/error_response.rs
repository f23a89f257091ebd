use std::borrow::Cow;

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body of every error response.
///
/// `status` selects the HTTP status code and is not serialized. Every
/// `401 Unauthorized` response also carries `WWW-Authenticate: Bearer`.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<'a> {
    /// The error name/type identifier
    pub name: Cow<'a, str>,
    /// User-friendly error message safe for client display
    pub message: Cow<'a, str>,
    /// The resource that the error relates to (optional, set by handler)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// Extra detail for the client (optional, set by handler)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const CONFLICT: Self = Self::new(
        "conflict",
        "The request conflicts with the current state of the resource",
        StatusCode::CONFLICT,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_AUTH_TOKEN: Self = Self::new(
        "missing_auth_token",
        "Not authenticated",
        StatusCode::UNAUTHORIZED,
    );
    pub const MISSING_PATH_PARAM: Self = Self::new(
        "missing_path_param",
        "Invalid request: missing required parameters",
        StatusCode::BAD_REQUEST,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const UNAUTHORIZED: Self = Self::new(
        "unauthorized",
        "Could not validate credentials",
        StatusCode::UNAUTHORIZED,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            context: None,
            status,
        }
    }

    /// Sets the resource. An existing resource is kept as a prefix.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        let new_resource = resource.into();
        self.resource = Some(match self.resource {
            Some(existing) => Cow::Owned(format!("{existing}/{new_resource}")),
            None => new_resource,
        });
        self
    }

    /// Replaces the message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches context. Existing context is joined with `; `.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{existing}; {new_context}")),
            None => new_context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut response = (status, Json(self)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}
