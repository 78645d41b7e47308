//! Shared client route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components should apply identical redirect behavior: no
//! redirect while the session is still hydrating (prevents a login flash),
//! then `/login` for anonymous sessions. Admin routes additionally bounce
//! non-admin sessions back to the dashboard.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionState};

/// Whether a settled session requires the login redirect.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    matches!(state, SessionState::Anonymous)
}

/// Whether a settled session lacks the admin capability.
pub fn should_redirect_non_admin(state: &SessionState) -> bool {
    match state {
        SessionState::Hydrating | SessionState::Anonymous => false,
        authenticated => !authenticated.is_admin(),
    }
}

/// Redirect to `/login` whenever the session settles anonymous.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` whenever the session settles without the admin
/// capability. Anonymous sessions are left to the unauth redirect.
pub fn install_admin_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_non_admin(&session.get()) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}
