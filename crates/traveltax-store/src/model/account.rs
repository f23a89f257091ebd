//! Account model for registered users.
//!
//! ## Models
//!
//! - [`Account`] - Stored account including the password digest
//! - [`NewAccount`] - Data structure for registering a new account

use std::fmt;

use jiff::Timestamp;

/// Registered user account.
///
/// Accounts are immutable after creation. The `Debug` implementation never
/// prints the password digest.
#[derive(Clone, PartialEq)]
pub struct Account {
    /// Unique account identifier, assigned on insert.
    pub id: i64,
    /// Unique, case-sensitive login name.
    pub username: String,
    /// PHC-formatted password digest. Never returned to clients.
    pub password_hash: String,
    /// Display name.
    pub fullname: String,
    /// Contact phone number.
    pub phone: String,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("fullname", &self.fullname)
            .field("phone", &self.phone)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Data for creating a new account.
#[derive(Default, Clone)]
pub struct NewAccount {
    /// Unique, case-sensitive login name.
    pub username: String,
    /// Pre-computed password digest.
    pub password_hash: String,
    /// Display name.
    pub fullname: String,
    /// Contact phone number.
    pub phone: String,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("fullname", &self.fullname)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

impl NewAccount {
    /// Converts the insert data into a stored record.
    pub(crate) fn into_account(self, id: i64) -> Account {
        Account {
            id,
            username: self.username,
            password_hash: self.password_hash,
            fullname: self.fullname,
            phone: self.phone,
            created_at: Timestamp::now(),
        }
    }
}
