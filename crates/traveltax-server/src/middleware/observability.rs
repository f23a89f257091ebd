//! Request IDs and request tracing.

use axum::Router;
use axum::http::HeaderName;
use axum::http::header;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension trait for `axum::`[`Router`] to apply observability middleware.
pub trait RouterObservabilityExt<S> {
    /// Layers observability middleware for request tracing and logging.
    ///
    /// Generates an `x-request-id` for requests that lack one, opens a
    /// tracing span per request, and echoes the ID on the response. The
    /// `Authorization` and `Cookie` headers are marked sensitive so they
    /// are redacted from logs.
    fn with_observability(self) -> Self;
}

impl<S> RouterObservabilityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_observability(self) -> Self {
        let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

        self.layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(SetSensitiveRequestHeadersLayer::new([
                header::AUTHORIZATION,
                header::COOKIE,
            ]))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    fn create_test_server() -> anyhow::Result<TestServer> {
        let router: Router = Router::new()
            .route("/", get(|| async { "ok" }))
            .with_observability();
        Ok(TestServer::new(router)?)
    }

    #[tokio::test]
    async fn generates_request_id() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/").await;
        response.assert_status_ok();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(uuid::Uuid::parse_str(request_id).is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn propagates_existing_request_id() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .get("/")
            .add_header(REQUEST_ID_HEADER, "caller-supplied-id")
            .await;
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).map(|v| v.as_bytes()),
            Some(b"caller-supplied-id".as_slice())
        );
        Ok(())
    }
}
