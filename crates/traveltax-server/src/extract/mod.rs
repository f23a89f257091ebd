//! Request extractors that reject with the JSON error body.
//!
//! ## Authentication
//!
//! - [`AuthHeader`] - Bearer token verification
//! - [`AuthState`] - Verified token resolved to a stored account
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - JSON deserialization
//! - [`ValidateJson`] - JSON extraction with `validator` checks
//! - [`Form`] - URL-encoded form deserialization
//! - [`Path`] - Path parameter extraction

pub mod auth;
pub mod reject;

pub use crate::extract::auth::{AuthHeader, AuthState};
pub use crate::extract::reject::{Form, Json, Path, ValidateJson};
