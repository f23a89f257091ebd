//! Recovery middleware for handling errors, panics, and timeouts.

use std::any::Any;
use std::future::ready;
use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::response::{IntoResponse, Response};
#[cfg(any(test, feature = "config"))]
use clap::Args;
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::catch_panic::CatchPanicLayer;

use crate::handler::{Error, ErrorKind};
use crate::{TRACING_TARGET_RECOVERY_ERROR, TRACING_TARGET_RECOVERY_PANIC};

type ResponseFut = BoxFuture<'static, Response>;
type Panic = Box<dyn Any + Send + 'static>;

/// Default request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Configuration for recovery middleware behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "config"), derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RecoveryConfig {
    /// Maximum duration in seconds to wait for a request to complete.
    /// Requests exceeding it receive a 500 response with a timeout message.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT)
    )]
    pub request_timeout: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RecoveryConfig {
    /// Creates a new configuration with the specified request timeout in seconds.
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            request_timeout: secs,
        }
    }

    /// Returns the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// Extension trait for `axum::`[`Router`] to apply recovery middleware.
pub trait RouterRecoveryExt<S> {
    /// Layers timeout, panic and service error handling.
    ///
    /// Each failure is converted into a JSON `500` response.
    fn with_recovery(self, config: &RecoveryConfig) -> Self;
}

impl<S> RouterRecoveryExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_recovery(self, config: &RecoveryConfig) -> Self {
        let middlewares = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_error))
            .layer(CatchPanicLayer::custom(catch_panic))
            .layer(TimeoutLayer::new(config.request_timeout()));

        self.layer(middlewares)
    }
}

fn handle_error(err: tower::BoxError) -> ResponseFut {
    use tower::timeout::error::Elapsed;

    let error = if err.is::<Elapsed>() {
        tracing::error!(
            target: TRACING_TARGET_RECOVERY_ERROR,
            error = %err,
            "request timeout exceeded"
        );

        Error::new(ErrorKind::InternalServerError)
            .with_message("Request timeout")
            .with_context("The request took too long to process and was terminated")
    } else {
        tracing::error!(
            target: TRACING_TARGET_RECOVERY_ERROR,
            error = %err,
            "unknown middleware error"
        );

        Error::new(ErrorKind::InternalServerError)
            .with_message("An unexpected error occurred")
    };

    ready(error.into_response()).boxed()
}

fn catch_panic(err: Panic) -> Response {
    let message = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic type");

    tracing::error!(
        target: TRACING_TARGET_RECOVERY_PANIC,
        message = %message,
        "service panic"
    );

    Error::new(ErrorKind::InternalServerError)
        .with_message("An unexpected panic occurred")
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    fn create_test_server(config: &RecoveryConfig) -> anyhow::Result<TestServer> {
        let router: Router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .route(
                "/panic",
                get(|| async {
                    if true {
                        panic!("handler exploded");
                    }
                    "unreachable"
                }),
            )
            .with_recovery(config);
        Ok(TestServer::new(router)?)
    }

    #[tokio::test]
    async fn timeout_becomes_internal_error() -> anyhow::Result<()> {
        let server = create_test_server(&RecoveryConfig::with_timeout_secs(1))?;

        let response = server.get("/slow").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "Request timeout"
        );
        Ok(())
    }

    #[tokio::test]
    async fn panic_becomes_internal_error() -> anyhow::Result<()> {
        let server = create_test_server(&RecoveryConfig::default())?;

        let response = server.get("/panic").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "internal_server_error");
        assert!(!body.to_string().contains("handler exploded"));
        Ok(())
    }

    #[test]
    fn parses_timeout_from_args() -> anyhow::Result<()> {
        #[derive(clap::Parser)]
        struct Cli {
            #[clap(flatten)]
            recovery: RecoveryConfig,
        }

        let cli = <Cli as clap::Parser>::try_parse_from(["test", "--request-timeout", "5"])?;
        assert_eq!(cli.recovery.request_timeout(), Duration::from_secs(5));
        Ok(())
    }
}
