//! Request types for HTTP handlers.

mod authentications;
mod provinces;

pub use authentications::*;
pub use provinces::*;
