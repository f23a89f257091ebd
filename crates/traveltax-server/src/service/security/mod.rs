//! Password hashing, session keys, and access token issuing and
//! verification.

mod access_claims;
mod password_hasher;
mod session_keys;
mod token_issuer;
mod token_verifier;

pub use access_claims::{AccessClaims, AccessToken, TOKEN_TYPE_BEARER};
pub use password_hasher::{CredentialError, PasswordHasher};
pub use session_keys::{SessionKeys, SessionKeysConfig};
pub use token_issuer::TokenIssuer;
pub use token_verifier::{TokenError, TokenVerifier};
