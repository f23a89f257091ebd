//! Handlers for per-province travel incentive records.

use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use traveltax_store::MemoryStore;
use traveltax_store::query::TravelRepository;

use super::request::CreateTravel;
use super::response::{Travel, Travels};
use crate::extract::{AuthState, Json, Path, ValidateJson};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for travel operations.
const TRACING_TARGET: &str = "traveltax_server::handler::travels";

async fn list_travels(State(store): State<MemoryStore>) -> Result<Json<Travels>> {
    let travels = store.connection().list_travels().await?;
    Ok(Json(travels.into_iter().map(Travel::from_model).collect()))
}

async fn list_secondary_travels(State(store): State<MemoryStore>) -> Result<Json<Travels>> {
    let travels = store.connection().list_secondary_travels().await?;
    Ok(Json(travels.into_iter().map(Travel::from_model).collect()))
}

#[tracing::instrument(skip_all, fields(province = %province))]
async fn read_travel(
    State(store): State<MemoryStore>,
    Path(province): Path<String>,
) -> Result<Json<Travel>> {
    match store.connection().find_travel_by_province(&province).await? {
        Some(travel) => Ok(Json(Travel::from_model(travel))),
        None => {
            tracing::debug!(target: TRACING_TARGET, "travel record not found");
            Err(ErrorKind::NotFound
                .with_message("Travel info not found")
                .with_resource("travel"))
        }
    }
}

#[tracing::instrument(skip_all, fields(account_id = auth_state.id))]
async fn create_travel(
    State(store): State<MemoryStore>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateTravel>,
) -> Result<Json<Travel>> {
    let travel = store
        .connection()
        .create_travel(request.into_model())
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        travel_id = travel.id,
        province = %travel.province,
        "travel record created"
    );

    Ok(Json(Travel::from_model(travel)))
}

/// Returns a [`Router`] with the lookup routes.
pub fn public_routes() -> Router<ServiceState> {
    Router::new()
        .route("/travel", get(list_travels))
        .route("/travel/", get(list_travels))
        .route("/travel/secondary", get(list_secondary_travels))
        .route("/travel/secondary/", get(list_secondary_travels))
        .route("/travel/{province}", get(read_travel))
}

/// Returns a [`Router`] with the routes that require authentication.
pub fn private_routes() -> Router<ServiceState> {
    Router::new()
        .route("/travel", post(create_travel))
        .route("/travel/", post(create_travel))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handler::test::{create_account_with_token, create_test_server};

    #[tokio::test]
    async fn lookups_are_public() -> anyhow::Result<()> {
        let (server, _) = create_test_server().await?;

        let all = server.get("/travel/").await.json::<serde_json::Value>();
        assert_eq!(all.as_array().map(Vec::len), Some(2));

        let secondary = server.get("/travel/secondary/").await.json::<serde_json::Value>();
        assert_eq!(secondary.as_array().map(Vec::len), Some(1));
        assert_eq!(secondary[0]["province"], "Nan");

        let response = server.get("/travel/Nan").await;
        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["is_secondary"], true);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_province_is_not_found() -> anyhow::Result<()> {
        let (server, _) = create_test_server().await?;

        let response = server.get("/travel/Atlantis").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "Travel info not found"
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_with_token() -> anyhow::Result<()> {
        let (server, state) = create_test_server().await?;
        let token = create_account_with_token(&state, "alice").await?;

        let request = json!({
            "province": "Trat",
            "description": "Island hopping",
            "tax_reduction": 15.0,
            "is_secondary": true,
        });

        server
            .post("/travel/")
            .json(&request)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post("/travel/")
            .authorization_bearer(&token)
            .json(&request)
            .await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["province"], "Trat");
        assert_eq!(body["description"], "Island hopping");

        server
            .post("/travel/")
            .authorization_bearer(&token)
            .json(&request)
            .await
            .assert_status(StatusCode::CONFLICT);
        Ok(())
    }
}
