use super::*;
use crate::net::types::{Role, User};

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        name: Some("Alice".to_owned()),
        role: Role::Brand,
        created_at: None,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_session_empty() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState::booting();
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = SessionState {
        user: Some(user()),
        token: Some("t1".to_owned()),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn token_without_user_still_redirects() {
    let state = SessionState { user: None, token: Some("t1".to_owned()), loading: false };
    assert!(should_redirect_unauth(&state));
}
