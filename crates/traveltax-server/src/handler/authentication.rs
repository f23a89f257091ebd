//! Registration and login handlers.
//!
//! Login follows the OAuth2 password flow: a URL-encoded form with
//! `username` and `password` is exchanged for a bearer token.

use axum::Router;
use axum::extract::State;
use axum::routing::post;
use traveltax_store::query::AccountRepository;
use traveltax_store::{MemoryStore, StoreError};

use super::request::{Login, Register};
use super::response::{Account, AuthToken};
use crate::extract::{Form, Json, ValidateJson};
use crate::handler::{ErrorKind, Result};
use crate::service::{PasswordHasher, ServiceState, TokenIssuer};

/// Tracing target for authentication operations.
const TRACING_TARGET: &str = "traveltax_server::handler::authentication";

const USERNAME_TAKEN: &str = "Username already exists";
const LOGIN_FAILED: &str = "Incorrect username or password";

/// Creates a new account.
#[tracing::instrument(skip_all, fields(username = %request.username))]
async fn register(
    State(store): State<MemoryStore>,
    State(password_hasher): State<PasswordHasher>,
    ValidateJson(request): ValidateJson<Register>,
) -> Result<Json<Account>> {
    let mut conn = store.connection();

    if conn.username_exists(&request.username).await? {
        tracing::debug!(target: TRACING_TARGET, "username already taken");
        return Err(ErrorKind::BadRequest.with_message(USERNAME_TAKEN).with_resource("account"));
    }

    let password_hash = password_hasher.hash_password(&request.password)?;
    let account = conn
        .create_account(request.into_model(password_hash))
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration.
            StoreError::Conflict { .. } => ErrorKind::BadRequest
                .with_message(USERNAME_TAKEN)
                .with_resource("account"),
            other => other.into(),
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = account.id,
        "account registered"
    );

    Ok(Json(Account::from_model(account)))
}

/// Exchanges credentials for an access token.
#[tracing::instrument(skip_all, fields(username = %request.username))]
async fn login(
    State(store): State<MemoryStore>,
    State(password_hasher): State<PasswordHasher>,
    State(token_issuer): State<TokenIssuer>,
    Form(request): Form<Login>,
) -> Result<Json<AuthToken>> {
    let mut conn = store.connection();
    let account = conn.find_account_by_username(&request.username).await?;

    // Unknown usernames still pay for a full verification.
    let password_valid = match &account {
        Some(account) => password_hasher.verify_password(&request.password, &account.password_hash),
        None => password_hasher.verify_dummy_password(&request.password),
    };

    let account = match account {
        Some(account) if password_valid => account,
        account => {
            tracing::warn!(
                target: TRACING_TARGET,
                account_exists = account.is_some(),
                "login failed"
            );
            return Err(ErrorKind::Unauthorized.with_message(LOGIN_FAILED));
        }
    };

    let access_token = token_issuer.issue(&account.username, None)?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = account.id,
        token_id = %access_token.token_id,
        expires_at = %access_token.expires_at,
        "login succeeded"
    );

    Ok(Json(AuthToken::from_access_token(access_token)))
}

/// Returns a [`Router`] with all related routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/register", post(register))
        .route("/register/", post(register))
        .route("/login", post(login))
        .route("/login/", post(login))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    fn alice() -> serde_json::Value {
        json!({
            "username": "alice",
            "password": "correct horse battery staple",
            "fullname": "Alice Example",
            "phone": "0812345678",
        })
    }

    #[tokio::test]
    async fn register_returns_public_account() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.post("/register/").json(&alice()).await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["username"], "alice");
        assert_eq!(body["fullname"], "Alice Example");
        assert_eq!(body["phone"], "0812345678");
        assert!(body["id"].is_i64());
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn register_duplicate_username() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        server.post("/register/").json(&alice()).await.assert_status_ok();
        let response = server.post("/register/").json(&alice()).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["message"], USERNAME_TAKEN);
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_invalid_fields() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let mut request = alice();
        request["username"] = json!("");
        server
            .post("/register/")
            .json(&request)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .post("/register/")
            .json(&json!({ "username": "bob" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn login_returns_bearer_token() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;
        server.post("/register/").json(&alice()).await.assert_status_ok();

        let response = server
            .post("/login/")
            .form(&[
                ("username", "alice"),
                ("password", "correct horse battery staple"),
            ])
            .await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["token_type"], "bearer");
        assert!(body["access_token"].as_str().is_some_and(|t| t.split('.').count() == 3));
        Ok(())
    }

    #[tokio::test]
    async fn login_ignores_extra_oauth2_fields() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;
        server.post("/register/").json(&alice()).await.assert_status_ok();

        let response = server
            .post("/login/")
            .form(&[
                ("grant_type", "password"),
                ("username", "alice"),
                ("password", "correct horse battery staple"),
                ("scope", ""),
            ])
            .await;
        response.assert_status_ok();
        Ok(())
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;
        server.post("/register/").json(&alice()).await.assert_status_ok();

        let wrong_password = server
            .post("/login/")
            .form(&[("username", "alice"), ("password", "wrong")])
            .await;
        let unknown_user = server
            .post("/login/")
            .form(&[("username", "mallory"), ("password", "wrong")])
            .await;

        for response in [wrong_password, unknown_user] {
            response.assert_status(StatusCode::UNAUTHORIZED);
            assert_eq!(
                response.headers().get(header::WWW_AUTHENTICATE).map(|v| v.as_bytes()),
                Some(b"Bearer".as_slice())
            );
            let body = response.json::<serde_json::Value>();
            assert_eq!(body["message"], LOGIN_FAILED);
        }
        Ok(())
    }

    #[tokio::test]
    async fn login_requires_both_fields() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.post("/login/").form(&[("username", "alice")]).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["context"], "The form field 'password' is required");
        Ok(())
    }
}
