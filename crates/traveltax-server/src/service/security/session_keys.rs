//! Signing secret, algorithm and token lifetime for access tokens.
//!
//! Loaded once at startup and shared immutably by the token issuer and
//! verifier. Any invalid setting is fatal.

use std::fmt;
use std::sync::Arc;

#[cfg(any(test, feature = "config"))]
use clap::Args;
use jiff::SignedDuration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::utility::tracing_targets::TRACING_TARGET_SESSION_KEYS as TRACING_TARGET;
use crate::{Error, Result};

/// Secrets shorter than this are accepted with a warning.
const RECOMMENDED_SECRET_LEN: usize = 32;

/// Upper bound for the default token lifetime (one year).
const MAX_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Parses an algorithm name such as `HS256`.
#[cfg(any(test, feature = "config"))]
fn parse_algorithm(name: &str) -> std::result::Result<Algorithm, String> {
    name.parse()
        .map_err(|_| format!("unknown token algorithm '{name}'"))
}

/// Session key configuration.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "config"), derive(Args))]
pub struct SessionKeysConfig {
    /// Secret used to sign and verify access tokens.
    #[cfg_attr(any(test, feature = "config"), arg(long, env = "SECRET_KEY"))]
    pub secret_key: String,

    /// HMAC algorithm used for access tokens (HS256, HS384 or HS512).
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "ALGORITHM", default_value = "HS256", value_parser = parse_algorithm)
    )]
    #[serde(default = "SessionKeysConfig::default_algorithm")]
    pub algorithm: Algorithm,

    /// Default access token lifetime in minutes.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "ACCESS_TOKEN_EXPIRE_MINUTES", default_value = "30")
    )]
    #[serde(default = "SessionKeysConfig::default_expire_minutes")]
    pub access_token_expire_minutes: u64,
}

impl SessionKeysConfig {
    /// Creates a configuration with the default algorithm and lifetime.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            algorithm: Self::default_algorithm(),
            access_token_expire_minutes: Self::default_expire_minutes(),
        }
    }

    /// Sets the signing algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the default token lifetime in minutes.
    pub fn with_expire_minutes(mut self, minutes: u64) -> Self {
        self.access_token_expire_minutes = minutes;
        self
    }

    fn default_algorithm() -> Algorithm {
        Algorithm::HS256
    }

    fn default_expire_minutes() -> u64 {
        30
    }

    /// Validates the configuration without building keys.
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.is_empty() {
            return Err(Error::config("Secret key must not be empty"));
        }

        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(Error::config(format!(
                "Unsupported token algorithm {:?}, expected HS256, HS384 or HS512",
                self.algorithm
            )));
        }

        if !(1..=MAX_TTL_MINUTES).contains(&self.access_token_expire_minutes) {
            return Err(Error::config(format!(
                "Access token lifetime must be between 1 and {MAX_TTL_MINUTES} minutes"
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for SessionKeysConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeysConfig")
            .field("algorithm", &self.algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .finish_non_exhaustive()
    }
}

/// Keys and settings used to sign and verify access tokens.
///
/// Cloning is cheap; all clones share the same keys.
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<SessionKeysInner>,
}

struct SessionKeysInner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: SignedDuration,
}

impl SessionKeys {
    /// Builds session keys from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty secret, a non-HMAC
    /// algorithm or an out of range lifetime.
    pub fn from_config(config: &SessionKeysConfig) -> Result<Self> {
        config.validate()?;

        if config.secret_key.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                target: TRACING_TARGET,
                secret_len = config.secret_key.len(),
                recommended_len = RECOMMENDED_SECRET_LEN,
                "secret key is shorter than recommended"
            );
        }

        let minutes = i64::try_from(config.access_token_expire_minutes)
            .map_err(|_| Error::config("Access token lifetime is out of range"))?;

        let secret = config.secret_key.as_bytes();
        let inner = SessionKeysInner {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: config.algorithm,
            default_ttl: SignedDuration::from_mins(minutes),
        };

        let this = Self {
            inner: Arc::new(inner),
        };
        this.validate_keys()?;

        tracing::info!(
            target: TRACING_TARGET,
            algorithm = ?config.algorithm,
            expire_minutes = config.access_token_expire_minutes,
            "session keys loaded"
        );

        Ok(this)
    }

    /// Returns the key used to sign tokens.
    #[inline]
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.inner.encoding_key
    }

    /// Returns the key used to verify tokens.
    #[inline]
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.inner.decoding_key
    }

    /// Returns the signing algorithm.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.inner.algorithm
    }

    /// Returns the lifetime applied when a token is issued without one.
    #[inline]
    pub fn default_ttl(&self) -> SignedDuration {
        self.inner.default_ttl
    }

    /// Returns decoding rules that check the signature and algorithm only.
    ///
    /// Expiry is checked by the caller against its own clock, with zero
    /// leeway.
    pub fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm());
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);
        validation
    }

    /// Signs and verifies a probe token to prove the keys are usable.
    pub fn validate_keys(&self) -> Result<()> {
        use jsonwebtoken::{Header, decode, encode};

        #[derive(Serialize, Deserialize)]
        struct ProbeClaims {
            sub: String,
            exp: i64,
        }

        let claims = ProbeClaims {
            sub: "probe".to_owned(),
            exp: jiff::Timestamp::now().as_second() + 300,
        };

        let token = encode(&Header::new(self.algorithm()), &claims, self.encoding_key())
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "key validation failed during encoding"
                );
                Error::auth("key validation encoding failed").with_source(e)
            })?;

        decode::<ProbeClaims>(&token, self.decoding_key(), &self.validation()).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "key validation failed during decoding"
            );
            Error::auth("key validation decoding failed").with_source(e)
        })?;

        tracing::debug!(target: TRACING_TARGET, "key validation successful");
        Ok(())
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("algorithm", &self.inner.algorithm)
            .field("default_ttl", &self.inner.default_ttl)
            .finish_non_exhaustive()
    }
}
