//! Edge route guard: cheap cookie-presence check ahead of page rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs per incoming request, before SSR and static handling, with access
//! only to the `token` cookie duplicate of the credential (the durable
//! client-side store is unreachable here). Presence is the only signal
//! checked; the token is never validated or decoded. This check is advisory
//! (a stale cookie can slip through); the client route guard inside the
//! dashboard shell is the authoritative backstop.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

/// Cookie holding the credential duplicate, written by the client at login.
pub const TOKEN_COOKIE: &str = "token";

const PROTECTED_PREFIXES: [&str; 1] = ["/dashboard"];
const AUTH_PATHS: [&str; 2] = ["/login", "/register"];

/// Outcome of the edge check for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Neither rule applies; serve the request unchanged.
    PassThrough,
    /// Protected path without a credential signal.
    ToLogin,
    /// Auth-only page visited with a credential signal.
    ToDashboard,
}

/// Pure routing decision from the request path and cookie presence.
pub fn route_decision(path: &str, has_token: bool) -> GuardDecision {
    if PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) && !has_token {
        return GuardDecision::ToLogin;
    }
    if AUTH_PATHS.iter().any(|prefix| path.starts_with(prefix)) && has_token {
        return GuardDecision::ToDashboard;
    }
    GuardDecision::PassThrough
}

/// Whether the jar carries a non-empty credential signal. An empty value is
/// treated as absent so a cleared-but-lingering cookie cannot re-open the
/// protected area.
pub fn cookie_token_present(jar: &CookieJar) -> bool {
    jar.get(TOKEN_COOKIE).is_some_and(|cookie| !cookie.value().is_empty())
}

/// Axum middleware applying [`route_decision`] to every request.
pub async fn edge_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    match route_decision(request.uri().path(), cookie_token_present(&jar)) {
        GuardDecision::PassThrough => next.run(request).await,
        GuardDecision::ToLogin => Redirect::temporary("/login").into_response(),
        GuardDecision::ToDashboard => Redirect::temporary("/dashboard").into_response(),
    }
}
