use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::extract::AuthState;

/// Requires a verified bearer token that resolves to a stored account.
///
/// Rejections render the same JSON errors as the [`AuthState`] extractor:
/// `401 Not authenticated` without a bearer header, and
/// `401 Could not validate credentials` for any other token failure.
///
/// ```rust,no_run
/// use axum::extract::Request;
/// use axum::middleware::{FromFnLayer, from_fn_with_state};
/// use traveltax_server::extract::AuthState;
/// use traveltax_server::middleware::require_authentication;
/// use traveltax_server::service::{ServiceConfig, ServiceState, SessionKeysConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = ServiceConfig::new(SessionKeysConfig::new("change-me"));
/// let state = ServiceState::from_config(&config).await?;
/// let _guard: FromFnLayer<_, _, (AuthState, Request)> =
///     from_fn_with_state(state, require_authentication);
/// # Ok(())
/// # }
/// ```
pub async fn require_authentication(
    AuthState(_): AuthState,
    request: Request,
    next: Next,
) -> Response {
    next.run(request).await
}
