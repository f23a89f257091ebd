#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use traveltax_server::handler::routes;
use traveltax_server::middleware::{RouterObservabilityExt, RouterRecoveryExt};
use traveltax_server::service::{ServiceConfig, ServiceState};

use crate::config::{Cli, MiddlewareConfig};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "traveltax_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "traveltax_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "traveltax_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = format!("{error:#}"),
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate()?;

    let state = create_service_state(&cli.service).await?;
    let router = create_router(state, &cli.middleware);

    server::serve_http(router, cli.server).await?;

    Ok(())
}

/// Creates the service state from configuration.
async fn create_service_state(config: &ServiceConfig) -> anyhow::Result<ServiceState> {
    ServiceState::from_config(config)
        .await
        .context("failed to create service state")
}

/// Creates the router with all middleware layers applied.
///
/// Recovery is the outermost layer, then observability, then the routes.
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    routes(state.clone())
        .with_state(state)
        .with_observability()
        .with_recovery(&middleware.recovery)
}
