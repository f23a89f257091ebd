//! Authentication response types.

use serde::{Deserialize, Serialize};

use crate::service::AccessToken;

/// Response returned after a successful login.
#[must_use]
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthToken {
    /// Signed bearer token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
}

impl AuthToken {
    /// Builds the login response from an issued token.
    pub fn from_access_token(token: AccessToken) -> Self {
        Self {
            access_token: token.token,
            token_type: token.token_type.to_owned(),
        }
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("token_type", &self.token_type)
            .finish_non_exhaustive()
    }
}
