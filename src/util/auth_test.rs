use super::*;
use crate::net::types::AuthUser;

fn user() -> AuthUser {
    AuthUser {
        id: "u1".to_owned(),
        full_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        profile_pic: None,
        created_at: None,
    }
}

#[test]
fn should_redirect_unauth_when_settled_and_user_missing() {
    let state = AuthState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_checking() {
    let state = AuthState::checking();
    assert!(!should_redirect_unauth(&state));
    assert!(is_resolving(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user()), ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_authed(&state));
}

#[test]
fn anonymous_user_stays_on_login() {
    assert!(!should_redirect_authed(&AuthState::default()));
}

#[test]
fn known_user_is_not_resolving_during_recheck() {
    let state = AuthState { user: Some(user()), is_checking_auth: true, ..AuthState::default() };
    assert!(!is_resolving(&state));
}
