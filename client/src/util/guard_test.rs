use super::*;
use crate::net::types::{Role, User};

fn authenticated(role: Role) -> SessionState {
    SessionState::Authenticated {
        token: "tok".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role,
            created_at: "2026-01-05T12:00:00Z".to_owned(),
        },
    }
}

#[test]
fn should_redirect_unauth_when_settled_anonymous() {
    assert!(should_redirect_unauth(&SessionState::Anonymous));
}

#[test]
fn should_not_redirect_while_hydrating() {
    assert!(!should_redirect_unauth(&SessionState::Hydrating));
}

#[test]
fn should_not_redirect_when_authenticated() {
    assert!(!should_redirect_unauth(&authenticated(Role::User)));
}

#[test]
fn admin_redirect_targets_authenticated_non_admins_only() {
    assert!(should_redirect_non_admin(&authenticated(Role::User)));
    assert!(!should_redirect_non_admin(&authenticated(Role::Admin)));
    // Hydrating sessions have not settled; anonymous ones belong to the
    // unauth redirect instead.
    assert!(!should_redirect_non_admin(&SessionState::Hydrating));
    assert!(!should_redirect_non_admin(&SessionState::Anonymous));
}
