//! Welcome and liveness endpoints.

use axum::Router;
use axum::routing::get;

use super::response::{MonitorStatus, Welcome};
use crate::extract::Json;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "traveltax_server::handler::monitors";

async fn welcome() -> Json<Welcome> {
    Json(Welcome::default())
}

async fn health_status() -> Json<MonitorStatus> {
    tracing::trace!(target: TRACING_TARGET, "health status requested");
    Json(MonitorStatus::default())
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn welcome_message() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/").await;
        response.assert_status_ok();

        let body = response.json::<Welcome>();
        assert_eq!(body.message, "Welcome to the Travel Tax API");
        Ok(())
    }

    #[tokio::test]
    async fn health_status_is_healthy() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["isHealthy"], true);
        assert!(body["updatedAt"].is_string());
        Ok(())
    }
}
