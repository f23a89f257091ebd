//! Authentication request types.

use std::fmt;

use serde::{Deserialize, Serialize};
use traveltax_store::model::NewAccount;
use validator::Validate;

/// Request payload for registration.
#[must_use]
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Register {
    /// Unique, case-sensitive login name.
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    /// Plaintext password. Only its digest is stored.
    #[validate(length(min = 1, max = 128))]
    pub password: String,

    /// Display name.
    #[validate(length(min = 1, max = 128))]
    pub fullname: String,

    /// Contact phone number.
    #[validate(length(min = 1, max = 32))]
    pub phone: String,
}

impl Register {
    /// Converts the request into insert data with the given digest.
    pub fn into_model(self, password_hash: String) -> NewAccount {
        NewAccount {
            username: self.username,
            password_hash,
            fullname: self.fullname,
            phone: self.phone,
        }
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Register")
            .field("username", &self.username)
            .field("fullname", &self.fullname)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

/// Form payload for login (OAuth2 password flow).
///
/// Additional form fields such as `grant_type` or `scope` are ignored.
#[must_use]
#[derive(Clone, Deserialize)]
pub struct Login {
    /// Login name of the account.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str) -> Register {
        Register {
            username: username.to_owned(),
            password: password.to_owned(),
            fullname: "Alice Example".to_owned(),
            phone: "0812345678".to_owned(),
        }
    }

    #[test]
    fn valid_registration() {
        assert!(register("alice", "hunter2").validate().is_ok());
    }

    #[test]
    fn empty_and_oversized_fields_are_rejected() {
        assert!(register("", "hunter2").validate().is_err());
        assert!(register("alice", "").validate().is_err());
        assert!(register(&"a".repeat(65), "hunter2").validate().is_err());
        assert!(register("alice", &"p".repeat(129)).validate().is_err());
    }

    #[test]
    fn debug_hides_password() {
        let request = register("alice", "hunter2");
        assert!(!format!("{request:?}").contains("hunter2"));

        let login = Login {
            username: "alice".to_owned(),
            password: "hunter2".to_owned(),
        };
        assert!(!format!("{login:?}").contains("hunter2"));
    }

    #[test]
    fn into_model_keeps_the_digest() {
        let model = register("alice", "hunter2").into_model("$argon2id$digest".to_owned());
        assert_eq!(model.username, "alice");
        assert_eq!(model.password_hash, "$argon2id$digest");
    }
}
