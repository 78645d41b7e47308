use super::*;

#[test]
fn nav_items_hide_admin_entries_for_users() {
    let items = nav_items(false);
    assert_eq!(items.len(), NAV_ITEMS.len());
    assert!(items.iter().all(|item| item.href != "/dashboard/admin/users"));
}

#[test]
fn nav_items_append_admin_entries_for_admins() {
    let items = nav_items(true);
    assert_eq!(items.len(), NAV_ITEMS.len() + ADMIN_ITEMS.len());
    assert_eq!(items.last().unwrap().label, "Manage Users");
}

#[test]
fn overview_entry_matches_exactly() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(!is_active("/dashboard/transactions", "/dashboard"));
}

#[test]
fn nested_entries_match_by_prefix() {
    assert!(is_active("/dashboard/admin/users", "/dashboard/admin/users"));
    assert!(is_active("/dashboard/transactions", "/dashboard/transactions"));
    assert!(!is_active("/dashboard/analytics", "/dashboard/transactions"));
}
