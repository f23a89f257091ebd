//! Handlers for per-province tax reduction records.

use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use traveltax_store::MemoryStore;
use traveltax_store::query::TaxRepository;

use super::request::CreateTax;
use super::response::{Tax, Taxes};
use crate::extract::{AuthState, Json, Path, ValidateJson};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for tax operations.
const TRACING_TARGET: &str = "traveltax_server::handler::taxes";

async fn list_taxes(State(store): State<MemoryStore>) -> Result<Json<Taxes>> {
    let taxes = store.connection().list_taxes().await?;
    Ok(Json(taxes.into_iter().map(Tax::from_model).collect()))
}

async fn list_secondary_taxes(State(store): State<MemoryStore>) -> Result<Json<Taxes>> {
    let taxes = store.connection().list_secondary_taxes().await?;
    Ok(Json(taxes.into_iter().map(Tax::from_model).collect()))
}

#[tracing::instrument(skip_all, fields(province = %province))]
async fn read_tax(
    State(store): State<MemoryStore>,
    Path(province): Path<String>,
) -> Result<Json<Tax>> {
    let Some(tax) = store.connection().find_tax_by_province(&province).await? else {
        tracing::debug!(target: TRACING_TARGET, "tax record not found");
        return Err(ErrorKind::NotFound
            .with_message("Tax info not found")
            .with_resource("tax"));
    };

    Ok(Json(Tax::from_model(tax)))
}

#[tracing::instrument(skip_all, fields(account_id = auth_state.id))]
async fn create_tax(
    State(store): State<MemoryStore>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateTax>,
) -> Result<Json<Tax>> {
    let tax = store.connection().create_tax(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        tax_id = tax.id,
        province = %tax.province,
        "tax record created"
    );

    Ok(Json(Tax::from_model(tax)))
}

/// Returns a [`Router`] with the lookup routes.
pub fn public_routes() -> Router<ServiceState> {
    Router::new()
        .route("/tax", get(list_taxes))
        .route("/tax/", get(list_taxes))
        .route("/tax/secondary", get(list_secondary_taxes))
        .route("/tax/secondary/", get(list_secondary_taxes))
        .route("/tax/{province}", get(read_tax))
}

/// Returns a [`Router`] with the routes that require authentication.
pub fn private_routes() -> Router<ServiceState> {
    Router::new()
        .route("/tax", post(create_tax))
        .route("/tax/", post(create_tax))
}
