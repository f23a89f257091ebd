//! Service layer error types.
//!
//! Handlers convert these into HTTP errors; startup code treats them as
//! fatal.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use traveltax_store::StoreError;

/// Boxed error source that is `Send + Sync`.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Result type alias for service layer operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Category of a service layer [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or invalid configuration.
    Config,
    /// Key, signing or hashing failures.
    Auth,
    /// Storage failures.
    Store,
    /// Internal service logic errors.
    Internal,
}

impl ErrorKind {
    /// Returns the error kind as a string for categorization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Auth => "auth",
            Self::Store => "store",
            Self::Internal => "internal_service",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service layer error with a kind, a message and an optional source.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    #[inline]
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches a source error.
    #[inline]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Creates a new configuration error.
    #[inline]
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// Creates a new authentication error.
    #[inline]
    pub fn auth(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Auth, message)
    }

    /// Creates a new storage error.
    #[inline]
    pub fn store(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Store, message)
    }

    /// Creates a new internal service error.
    #[inline]
    pub fn internal(
        service: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let full_message = format!("{}: {}", service.into(), message.into());
        Self::new(ErrorKind::Internal, full_message)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::store(err.to_string()).with_source(err)
    }
}
