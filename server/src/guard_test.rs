use super::*;
use axum_extra::extract::cookie::Cookie;

// =============================================================
// route_decision
// =============================================================

#[test]
fn protected_path_without_token_redirects_to_login() {
    assert_eq!(route_decision("/dashboard", false), GuardDecision::ToLogin);
    assert_eq!(route_decision("/dashboard/anything", false), GuardDecision::ToLogin);
    assert_eq!(route_decision("/dashboard/admin/users", false), GuardDecision::ToLogin);
}

#[test]
fn protected_path_with_token_passes_through() {
    assert_eq!(route_decision("/dashboard", true), GuardDecision::PassThrough);
    assert_eq!(route_decision("/dashboard/x", true), GuardDecision::PassThrough);
}

#[test]
fn auth_pages_with_token_redirect_to_dashboard() {
    assert_eq!(route_decision("/login", true), GuardDecision::ToDashboard);
    assert_eq!(route_decision("/register", true), GuardDecision::ToDashboard);
}

#[test]
fn auth_pages_without_token_pass_through() {
    assert_eq!(route_decision("/login", false), GuardDecision::PassThrough);
    assert_eq!(route_decision("/register", false), GuardDecision::PassThrough);
}

#[test]
fn other_paths_always_pass_through() {
    for path in ["/", "/healthz", "/pkg/client.wasm"] {
        assert_eq!(route_decision(path, false), GuardDecision::PassThrough, "{path} without token");
        assert_eq!(route_decision(path, true), GuardDecision::PassThrough, "{path} with token");
    }
}

// =============================================================
// cookie_token_present
// =============================================================

#[test]
fn missing_cookie_reads_as_absent() {
    let jar = CookieJar::new();
    assert!(!cookie_token_present(&jar));
}

#[test]
fn empty_cookie_value_reads_as_absent() {
    let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, ""));
    assert!(!cookie_token_present(&jar));
}

#[test]
fn non_empty_cookie_value_reads_as_present() {
    let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, "tok-123"));
    assert!(cookie_token_present(&jar));
}

#[test]
fn unrelated_cookies_do_not_count() {
    let jar = CookieJar::new().add(Cookie::new("theme", "dark"));
    assert!(!cookie_token_present(&jar));
}
