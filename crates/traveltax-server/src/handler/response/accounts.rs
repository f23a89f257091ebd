//! Account response types.

use serde::{Deserialize, Serialize};
use traveltax_store::model;

/// Public view of an account. Never includes the password digest.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier of the account.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Display name.
    pub fullname: String,
    /// Contact phone number.
    pub phone: String,
}

impl Account {
    /// Builds the public view of a stored account.
    pub fn from_model(account: model::Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            fullname: account.fullname,
            phone: account.phone,
        }
    }
}
