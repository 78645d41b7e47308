use super::*;

#[test]
fn known_actions_get_distinct_badges() {
    assert_eq!(action_badge_class("CREATE"), "badge badge--create");
    assert_eq!(action_badge_class("UPDATE"), "badge badge--update");
    assert_eq!(action_badge_class("DELETE"), "badge badge--delete");
    assert_eq!(action_badge_class("LOGIN"), "badge badge--login");
    assert_eq!(action_badge_class("REGISTER"), "badge badge--register");
}

#[test]
fn unknown_actions_share_neutral_badge() {
    assert_eq!(action_badge_class("EXPORT"), "badge");
    assert_eq!(action_badge_class(""), "badge");
}
