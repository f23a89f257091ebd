//! HTTP server startup and lifecycle management.

use std::future::Future;
use std::io;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::{Result, ServerError, shutdown_signal};
use crate::config::ServerConfig;
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Starts an HTTP server that stops on `Ctrl+C` or `SIGTERM`.
///
/// In-flight requests get up to the configured shutdown timeout to finish.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server fails while running.
pub async fn serve_http(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(validation_error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %validation_error,
            "invalid server configuration"
        );

        return Err(ServerError::InvalidConfig(validation_error.to_string()));
    }

    let server_addr = server_config.server_addr();
    let listener = TcpListener::bind(server_addr).await.map_err(|source| {
        let error = ServerError::BindError {
            address: server_addr.to_string(),
            source,
        };

        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %error,
            suggestion = error.suggestion(),
            "failed to bind to address"
        );

        error
    })?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_addr,
        "server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            "server is bound to all interfaces, ensure firewall rules are configured"
        );
    }

    let (signal_tx, signal_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signal_tx.send(());
        })
        .into_future();

    serve_with_shutdown(server, signal_rx, server_config.shutdown_timeout()).await
}

/// Drives `server` to completion, bounding the drain after `signal` fires.
async fn serve_with_shutdown<F>(
    server: F,
    signal: oneshot::Receiver<()>,
    shutdown_timeout: Duration,
) -> Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::pin!(server);

    let result = tokio::select! {
        result = &mut server => result,
        Ok(()) = signal => {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                timeout_secs = shutdown_timeout.as_secs(),
                "graceful shutdown initiated"
            );

            match tokio::time::timeout(shutdown_timeout, &mut server).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!(
                        target: TRACING_TARGET_SERVER_SHUTDOWN,
                        timeout_secs = shutdown_timeout.as_secs(),
                        "graceful shutdown timed out, dropping open connections"
                    );
                    Ok(())
                }
            }
        }
    };

    result.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %err,
            "server encountered an error"
        );
        ServerError::Runtime(err)
    })?;

    tracing::info!(target: TRACING_TARGET_SERVER_SHUTDOWN, "server shut down gracefully");
    Ok(())
}
