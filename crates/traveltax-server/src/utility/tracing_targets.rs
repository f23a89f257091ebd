//! Centralized tracing target constants for structured logging.
//!
//! Filter on these targets with `RUST_LOG`, for example
//! `RUST_LOG=traveltax_server::authentication=debug`.

/// Bearer token extraction, verification and subject resolution.
pub const TRACING_TARGET_AUTHENTICATION: &str = "traveltax_server::authentication";

/// Access token issuing.
pub const TRACING_TARGET_TOKENS: &str = "traveltax_server::tokens";

/// Password hashing and verification operations.
pub const TRACING_TARGET_PASSWORD_HASHER: &str = "traveltax_server::password_hasher";

/// Session key loading and validation.
pub const TRACING_TARGET_SESSION_KEYS: &str = "traveltax_server::session_keys";

/// Service state construction.
pub const TRACING_TARGET_SERVICE: &str = "traveltax_server::service";

/// Error recovery including middleware errors and request timeouts.
pub const TRACING_TARGET_RECOVERY_ERROR: &str = "traveltax_server::recovery::error";

/// Panic recovery in handlers.
pub const TRACING_TARGET_RECOVERY_PANIC: &str = "traveltax_server::recovery::panic";
