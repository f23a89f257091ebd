//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - [`require_authentication`] guards private routes
//! - [`RouterObservabilityExt`] adds request IDs and request tracing
//! - [`RouterRecoveryExt`] converts timeouts and panics into JSON errors
//!
//! ```rust,no_run
//! use axum::Router;
//! use traveltax_server::middleware::{RecoveryConfig, RouterObservabilityExt, RouterRecoveryExt};
//!
//! let app: Router = Router::new()
//!     .with_recovery(&RecoveryConfig::default())
//!     .with_observability();
//! ```

mod observability;
mod recovery;
mod require_auth;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use require_auth::require_authentication;
