//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── server: ServerConfig          # Host, port, shutdown
//! ├── middleware: MiddlewareConfig  # Request timeout
//! └── service: ServiceConfig        # Token signing, seed data
//! ```
//!
//! Every option can be given as a flag or an environment variable.

mod middleware;
mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
pub use middleware::MiddlewareConfig;
pub use server::ServerConfig;
use traveltax_server::service::ServiceConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "traveltax")]
#[command(about = "Travel Tax API server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration.
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Token signing and storage configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Loads the `.env` file (if enabled) and parses CLI arguments.
    ///
    /// The `.env` file is read first so clap's `env` fallbacks can see it.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.middleware
            .validate()
            .context("invalid middleware configuration")?;
        self.service
            .validate()
            .context("invalid service configuration")?;
        Ok(())
    }

    /// Logs configuration without secrets.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            dotenv = cfg!(feature = "dotenv"),
            "build information"
        );

        self.server.log();
        self.middleware.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            algorithm = ?self.service.session_keys.algorithm,
            access_token_expire_minutes = self.service.session_keys.access_token_expire_minutes,
            seed_path = ?self.service.store.seed_path(),
            "service configuration"
        );
    }
}
