use super::*;

fn sample_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        created_at: "2026-01-05T12:00:00Z".to_owned(),
    }
}

// =============================================================
// Hydration settling
// =============================================================

#[test]
fn settle_authenticated_when_both_fields_present() {
    let state = settle(Some("tok".to_owned()), Some(sample_user(Role::User)));
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("tok"));
}

#[test]
fn settle_anonymous_when_token_missing() {
    let state = settle(None, Some(sample_user(Role::User)));
    assert_eq!(state, SessionState::Anonymous);
}

#[test]
fn settle_anonymous_when_profile_missing() {
    let state = settle(Some("tok".to_owned()), None);
    assert_eq!(state, SessionState::Anonymous);
}

#[test]
fn settle_anonymous_when_store_empty() {
    assert_eq!(settle(None, None), SessionState::Anonymous);
}

// =============================================================
// State accessors
// =============================================================

#[test]
fn default_state_is_hydrating() {
    let state = SessionState::default();
    assert!(state.is_hydrating());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

#[test]
fn role_is_a_settled_capability() {
    let admin = settle(Some("tok".to_owned()), Some(sample_user(Role::Admin)));
    assert!(admin.is_admin());

    let user = settle(Some("tok".to_owned()), Some(sample_user(Role::User)));
    assert!(!user.is_admin());
    assert_eq!(user.role(), Some(Role::User));

    assert_eq!(SessionState::Anonymous.role(), None);
}

// =============================================================
// Profile merge
// =============================================================

#[test]
fn profile_update_merges_submitted_fields_only() {
    let user = sample_user(Role::User);
    let update = ProfileUpdate { name: Some("New Name".to_owned()), ..ProfileUpdate::default() };

    let merged = apply_profile_update(&user, &update);
    assert_eq!(merged.name, "New Name");
    assert_eq!(merged.email, user.email);
    assert_eq!(merged.id, user.id);
    assert_eq!(merged.role, user.role);
    assert_eq!(merged.created_at, user.created_at);
}

#[test]
fn profile_update_ignores_password_field() {
    let user = sample_user(Role::User);
    let update = ProfileUpdate {
        password: Some("hunter2-hunter2".to_owned()),
        ..ProfileUpdate::default()
    };
    assert_eq!(apply_profile_update(&user, &update), user);
}

#[test]
fn profile_update_keeps_token_and_phase_shape() {
    let state = SessionState::Authenticated {
        token: "tok".to_owned(),
        user: sample_user(Role::User),
    };
    let update = ProfileUpdate { email: Some("new@example.com".to_owned()), ..ProfileUpdate::default() };

    if let SessionState::Authenticated { token, user } = &state {
        let merged = apply_profile_update(user, &update);
        let next = SessionState::Authenticated { token: token.clone(), user: merged };
        assert!(next.is_authenticated());
        assert_eq!(next.token(), Some("tok"));
        assert_eq!(next.user().unwrap().email, "new@example.com");
    } else {
        unreachable!();
    }
}
