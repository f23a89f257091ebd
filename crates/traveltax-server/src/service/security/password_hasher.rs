//! Password hashing and verification using Argon2id.
//!
//! Digests are PHC strings (`$argon2id$v=19$...`) that embed the algorithm,
//! parameters and a per-call random salt.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier};
use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::utility::tracing_targets::TRACING_TARGET_PASSWORD_HASHER as TRACING_TARGET;
use crate::{Error, Result};

/// Reason a password did not verify against a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// The digest is well-formed but the password does not match.
    #[error("password does not match")]
    Mismatch,
    /// The stored digest could not be parsed or used.
    #[error("password digest is malformed")]
    MalformedDigest,
}

/// Password hashing service using Argon2id with default parameters.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a new instance of the [`PasswordHasher`] service.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// Two calls with the same password never return the same digest.
    ///
    /// # Errors
    ///
    /// Fails only if the hashing primitive itself fails; the input is never
    /// the cause.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password hashing operation failed"
                );
                Error::internal("password_hasher", "password hashing failed")
            })?;

        Ok(password_hash.to_string())
    }

    /// Checks a password against a stored digest.
    ///
    /// The comparison is constant-time.
    pub fn check_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), CredentialError> {
        let parsed_hash = PasswordHash::new(stored_hash).map_err(|e| {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %e,
                "invalid password hash format"
            );
            CredentialError::MalformedDigest
        })?;

        if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
            tracing::warn!(
                target: TRACING_TARGET,
                algorithm = %parsed_hash.algorithm,
                "password hash is missing its salt or output"
            );
            return Err(CredentialError::MalformedDigest);
        }

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(()),
            Err(HashError::Password) => {
                tracing::debug!(target: TRACING_TARGET, "password verification failed");
                Err(CredentialError::Mismatch)
            }
            Err(e) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password hash could not be used for verification"
                );
                Err(CredentialError::MalformedDigest)
            }
        }
    }

    /// Returns `true` if the password matches the stored digest.
    ///
    /// Never fails: a malformed digest yields `false`.
    #[inline]
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.check_password(password, stored_hash).is_ok()
    }

    /// Runs a full hash and verification against a random password.
    ///
    /// Used when the account does not exist so that a failed login takes
    /// as long as a real verification. Always returns `false`.
    pub fn verify_dummy_password(&self, password: &str) -> bool {
        let mut rng = rand::thread_rng();
        let password_len = rng.gen_range(16..32);
        let dummy_password: String = rng
            .sample_iter(&Alphanumeric)
            .take(password_len)
            .map(char::from)
            .collect();

        if let Ok(dummy_hash) = self.hash_password(&dummy_password) {
            let _ = self.check_password(password, &dummy_hash);
        }

        false
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("secure_password_123")?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("secure_password_123", &hash));
        Ok(())
    }

    #[test]
    fn wrong_password_is_rejected() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("correct_password")?;

        assert!(!hasher.verify_password("wrong_password", &hash));
        assert_eq!(
            hasher.check_password("wrong_password", &hash),
            Err(CredentialError::Mismatch)
        );
        Ok(())
    }

    #[test]
    fn hash_produces_unique_salts() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();

        let hash1 = hasher.hash_password("test_password")?;
        let hash2 = hasher.hash_password("test_password")?;

        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password("test_password", &hash1));
        assert!(hasher.verify_password("test_password", &hash2));
        Ok(())
    }

    #[test]
    fn malformed_digest_is_false_not_error() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify_password("password", "invalid_hash_format"));
        assert!(!hasher.verify_password("password", ""));
        assert_eq!(
            hasher.check_password("password", "$argon2id$garbage"),
            Err(CredentialError::MalformedDigest)
        );
    }

    #[test]
    fn truncated_digest_is_malformed() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("password")?;

        let params_only = "$argon2id$v=19$m=19456,t=2,p=1";
        assert_eq!(
            hasher.check_password("password", params_only),
            Err(CredentialError::MalformedDigest)
        );

        let (without_output, _) = hash.rsplit_once('$').unwrap_or_default();
        assert_eq!(
            hasher.check_password("password", without_output),
            Err(CredentialError::MalformedDigest)
        );
        assert!(!hasher.verify_password("password", without_output));
        Ok(())
    }

    #[test]
    fn empty_password_roundtrips() -> anyhow::Result<()> {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("")?;

        assert!(hasher.verify_password("", &hash));
        assert!(!hasher.verify_password(" ", &hash));
        Ok(())
    }

    #[test]
    fn dummy_verification_always_fails() {
        let hasher = PasswordHasher::new();
        assert!(!hasher.verify_dummy_password("any_password"));
    }
}
