//! Handlers for the authenticated account.

use axum::Router;
use axum::routing::get;

use super::response::Account;
use crate::extract::{AuthState, Json};
use crate::service::ServiceState;

/// Returns the account that owns the bearer token.
#[tracing::instrument(skip_all, fields(account_id = auth_state.id))]
async fn read_current_account(auth_state: AuthState) -> Json<Account> {
    Json(Account::from_model(auth_state.into_account()))
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/users/me", get(read_current_account))
        .route("/users/me/", get(read_current_account))
}
