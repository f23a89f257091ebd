//! Bearer token authentication.
//!
//! - [`AuthHeader`] verifies the bearer token and yields its claims.
//! - [`AuthState`] additionally resolves the subject to a stored account.

mod auth_header;
mod auth_state;

pub use self::auth_header::AuthHeader;
pub use self::auth_state::AuthState;
