//! REST wrapper for communicating with the Expense Sense backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request that has one.
//! Server-side (SSR): stubs returning errors since the backend is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 on a request that carried a bearer credential proves the stored
//! session stale: the wrapper clears the persisted store (cookie included)
//! and forces a full navigation to `/login`, independent of whichever page
//! issued the call. Everything else surfaces as a typed [`ApiError`] with
//! no retry and no session mutation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiEnvelope;
use super::types::{
    ActivityLogEntry, AdminUser, AnalyticsSummary, AuthPayload, Paginated, PredictionResult,
    ProfileUpdate, Role, Transaction, TransactionCreate, TransactionUpdate,
};
#[cfg(feature = "hydrate")]
use crate::util::session_store::{BrowserStore, SessionStore as _};

/// Error taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the submitted credentials (bad login, duplicate
    /// registration email, server-side validation). Shown to the user as-is.
    #[error("{0}")]
    Auth(String),
    /// Any other non-success HTTP response, passed through unmodified.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Network-level failure; the request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
}

/// Compile-time API base, overridable via `EXPENSE_API_URL`.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("EXPENSE_API_URL").unwrap_or("/api/v1")
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// `Authorization` header value for a stored token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response proves the stored credential stale. Only a 401 on a
/// request that actually carried the credential counts; an anonymous 401
/// (e.g. a failed login) cannot invalidate anything.
#[cfg(any(test, feature = "hydrate"))]
fn should_purge_session(status: u16, had_bearer: bool) -> bool {
    status == 401 && had_bearer
}

/// Extract a display message from an error body: FastAPI-style `detail`
/// first, then the envelope `message`, then a generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_owned();
                }
            }
        }
    }
    format!("request failed: {status}")
}

/// Unwrap the fixed response envelope into its payload.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_envelope<T>(status: u16, envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
    match envelope.data {
        Some(data) if envelope.success => Ok(data),
        _ => Err(ApiError::Api { status, message: envelope.message }),
    }
}

/// Accept a payload-less acknowledgement envelope.
#[cfg(any(test, feature = "hydrate"))]
fn ack_envelope(status: u16, envelope: ApiEnvelope<serde_json::Value>) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::Api { status, message: envelope.message })
    }
}

/// Re-type a credential rejection so forms can display it distinctly.
#[cfg(any(test, feature = "hydrate"))]
fn classify_auth_failure(error: ApiError) -> ApiError {
    match error {
        ApiError::Api { status, message } if matches!(status, 400 | 401 | 409 | 422) => {
            ApiError::Auth(message)
        }
        other => other,
    }
}

/// Query string for the transaction list endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn transactions_query(skip: u64, limit: u64, category: Option<&str>, flagged: Option<bool>) -> String {
    let mut query = format!("?skip={skip}&limit={limit}");
    if let Some(category) = category {
        query.push_str("&category=");
        query.push_str(&urlencoding::encode(category));
    }
    if let Some(flagged) = flagged {
        query.push_str("&flagged=");
        query.push_str(if flagged { "true" } else { "false" });
    }
    query
}

#[cfg(any(test, feature = "hydrate"))]
fn role_patch_path(user_id: &str, role: Role) -> String {
    format!("/admin/users/{user_id}/role?role={}", role.as_str())
}

#[cfg(not(feature = "hydrate"))]
fn server_side_stub() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

// =============================================================================
// REQUEST CORE (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
async fn request_envelope<T: serde::de::DeserializeOwned>(
    method: gloo_net::http::Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(u16, ApiEnvelope<T>), ApiError> {
    use gloo_net::http::RequestBuilder;

    let url = endpoint(path);
    let token = BrowserStore.token();
    let had_bearer = token.is_some();

    let mut builder = RequestBuilder::new(&url).method(method);
    if let Some(token) = &token {
        builder = builder.header("Authorization", &bearer_value(token));
    }

    let request = match body {
        Some(json) => builder.json(&json).map_err(|e| ApiError::Transport(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Transport(e.to_string()))?,
    };

    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();

    if should_purge_session(status, had_bearer) {
        // Last-resort safety net: any stale credential is purged the moment
        // any call proves it invalid, not just on explicit logout.
        BrowserStore.clear();
        crate::util::nav::force_navigate("/login");
        return Err(ApiError::Api { status, message: "session expired".to_owned() });
    }

    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(ApiError::Api { status, message: error_message(status, &text) });
    }

    let envelope: ApiEnvelope<T> =
        serde_json::from_str(&text).map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((status, envelope))
}

#[cfg(feature = "hydrate")]
async fn send<T: serde::de::DeserializeOwned>(
    method: gloo_net::http::Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let (status, envelope) = request_envelope(method, path, body).await?;
    unwrap_envelope(status, envelope)
}

#[cfg(feature = "hydrate")]
async fn send_ack(
    method: gloo_net::http::Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    let (status, envelope) = request_envelope(method, path, body).await?;
    ack_envelope(status, envelope)
}

// =============================================================================
// AUTH ENDPOINTS
// =============================================================================

/// `POST /auth/login` — exchange credentials for a fresh token + profile.
///
/// # Errors
///
/// [`ApiError::Auth`] when the backend rejects the credentials.
pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        send(gloo_net::http::Method::POST, "/auth/login", Some(body))
            .await
            .map_err(classify_auth_failure)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(server_side_stub())
    }
}

/// `POST /auth/register` — create an account; same contract as [`login`].
///
/// # Errors
///
/// [`ApiError::Auth`] when the backend rejects the registration.
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        send(gloo_net::http::Method::POST, "/auth/register", Some(body))
            .await
            .map_err(classify_auth_failure)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(server_side_stub())
    }
}

/// `PUT /auth/me` — update profile fields for the current user.
pub async fn update_profile(update: &ProfileUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(update).map_err(|e| ApiError::Transport(e.to_string()))?;
        send_ack(gloo_net::http::Method::PUT, "/auth/me", Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(server_side_stub())
    }
}

// =============================================================================
// TRANSACTION ENDPOINTS
// =============================================================================

/// `GET /transactions` — one page of the user's transactions, newest first.
pub async fn list_transactions(
    skip: u64,
    limit: u64,
    category: Option<&str>,
    flagged: Option<bool>,
) -> Result<Paginated<Transaction>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/transactions{}", transactions_query(skip, limit, category, flagged));
        send(gloo_net::http::Method::GET, &path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (skip, limit, category, flagged);
        Err(server_side_stub())
    }
}

/// `POST /transactions` — create a transaction; the backend categorises and
/// fraud-scores it before returning the stored row.
pub async fn create_transaction(payload: &TransactionCreate) -> Result<Transaction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Transport(e.to_string()))?;
        send(gloo_net::http::Method::POST, "/transactions", Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(server_side_stub())
    }
}

/// `PUT /transactions/{id}` — partial update of one transaction.
pub async fn update_transaction(
    id: &str,
    payload: &TransactionUpdate,
) -> Result<Transaction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Transport(e.to_string()))?;
        let path = format!("/transactions/{id}");
        send(gloo_net::http::Method::PUT, &path, Some(body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(server_side_stub())
    }
}

/// `DELETE /transactions/{id}`.
pub async fn delete_transaction(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/transactions/{id}");
        send_ack(gloo_net::http::Method::DELETE, &path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(server_side_stub())
    }
}

// =============================================================================
// ANALYTICS + ACTIVITY + ADMIN ENDPOINTS
// =============================================================================

/// `GET /analytics/summary` — aggregated spending statistics.
pub async fn analytics_summary() -> Result<AnalyticsSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(gloo_net::http::Method::GET, "/analytics/summary", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_side_stub())
    }
}

/// `GET /analytics/predict` — next-month spending prediction.
pub async fn predict_spending() -> Result<PredictionResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(gloo_net::http::Method::GET, "/analytics/predict", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_side_stub())
    }
}

/// `GET /activity-logs` — the current user's recent account activity.
pub async fn activity_logs(limit: u64) -> Result<Paginated<ActivityLogEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/activity-logs?limit={limit}");
        send(gloo_net::http::Method::GET, &path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err(server_side_stub())
    }
}

/// `GET /admin/users` — all registered users (admin only).
pub async fn admin_users(limit: u64) -> Result<Paginated<AdminUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = format!("/admin/users?limit={limit}");
        send(gloo_net::http::Method::GET, &path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err(server_side_stub())
    }
}

/// `PATCH /admin/users/{id}/role` — promote or demote a user (admin only).
pub async fn set_user_role(user_id: &str, role: Role) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let path = role_patch_path(user_id, role);
        send_ack(gloo_net::http::Method::PATCH, &path, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        Err(server_side_stub())
    }
}
