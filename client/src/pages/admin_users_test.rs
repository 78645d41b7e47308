use super::*;

fn row(id: &str, role: Role) -> AdminUser {
    AdminUser {
        id: id.to_owned(),
        name: "User".to_owned(),
        email: format!("{id}@example.com"),
        role,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn toggled_role_flips_both_ways() {
    assert_eq!(toggled_role(Role::User), Role::Admin);
    assert_eq!(toggled_role(Role::Admin), Role::User);
}

#[test]
fn apply_role_change_updates_matching_row_only() {
    let mut users = vec![row("u-1", Role::User), row("u-2", Role::User)];
    apply_role_change(&mut users, "u-2", Role::Admin);
    assert_eq!(users[0].role, Role::User);
    assert_eq!(users[1].role, Role::Admin);
}

#[test]
fn apply_role_change_ignores_unknown_id() {
    let mut users = vec![row("u-1", Role::User)];
    apply_role_change(&mut users, "u-404", Role::Admin);
    assert_eq!(users[0].role, Role::User);
}
