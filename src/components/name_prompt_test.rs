use super::*;
use crate::net::types::{Role, User};

fn signed_in(name: Option<&str>) -> SessionState {
    SessionState {
        user: Some(User {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            name: name.map(str::to_owned),
            role: Role::Creator,
            created_at: None,
        }),
        token: Some("t1".to_owned()),
        loading: false,
    }
}

// ============================================================================
// Visibility rules
// ============================================================================

#[test]
fn shown_for_authenticated_user_without_name() {
    assert!(should_show_name_prompt(&signed_in(None), false));
}

#[test]
fn shown_when_name_is_empty_string() {
    assert!(should_show_name_prompt(&signed_in(Some("")), false));
}

#[test]
fn hidden_when_user_already_has_a_name() {
    assert!(!should_show_name_prompt(&signed_in(Some("Hanna")), false));
}

#[test]
fn hidden_when_previously_skipped() {
    assert!(!should_show_name_prompt(&signed_in(None), true));
}

#[test]
fn hidden_when_not_authenticated() {
    assert!(!should_show_name_prompt(&SessionState::default(), false));
    assert!(!should_show_name_prompt(&SessionState::booting(), false));
}
