use super::*;

use futures::executor::block_on;

use crate::state::toast::ToastKind;
use crate::state::session::HOME_ROUTE;
use crate::test_support::*;
use crate::util::validate::ValidationError;

fn draft(full_name: &str, email: &str, password: &str) -> SignupProfile {
    SignupProfile { full_name: full_name.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn missing_name_is_reported_without_request() {
    let h = harness(Outcome::Accept, AuthState::default());
    let err = block_on(submit_signup(&h.client, draft("", "a@b.com", "secret1"))).unwrap_err();

    assert_eq!(err, SessionError::Validation(ValidationError::FullNameRequired));
    assert!(h.recorder.calls.borrow().is_empty());
    let toasts = h.hooks.toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, "Full name is required");
}

#[test]
fn malformed_email_is_reported_without_request() {
    let h = harness(Outcome::Accept, AuthState::default());
    let err = block_on(submit_signup(&h.client, draft("Ada", "not-an-email", "secret1"))).unwrap_err();
    assert_eq!(err, SessionError::Validation(ValidationError::InvalidEmailFormat));
    assert!(h.recorder.calls.borrow().is_empty());
}

#[test]
fn short_password_is_reported_without_request() {
    let h = harness(Outcome::Accept, AuthState::default());
    let err = block_on(submit_signup(&h.client, draft("Ada", "a@b.com", "short"))).unwrap_err();
    assert_eq!(err, SessionError::Validation(ValidationError::PasswordTooShort));
    assert!(h.recorder.calls.borrow().is_empty());
    assert!(!h.store.borrow().is_signing_up);
}

#[test]
fn valid_draft_is_submitted_exactly_once() {
    let h = harness(Outcome::Accept, AuthState::default());
    let user = block_on(submit_signup(&h.client, draft("Ada", "a@b.com", "secret1"))).unwrap();

    assert_eq!(*h.recorder.calls.borrow(), vec!["signup"]);
    assert_eq!(user.full_name, "Ada");
    assert_eq!(h.store.borrow().user.as_ref(), Some(&user));
    assert!(!h.store.borrow().is_signing_up);
    assert_eq!(*h.hooks.routes.borrow(), vec![HOME_ROUTE.to_owned()]);
}

#[test]
fn rejected_signup_clears_flag() {
    let h = harness(rejected("User already exists"), AuthState::default());
    let err = block_on(submit_signup(&h.client, draft("Ada", "a@b.com", "secret1"))).unwrap_err();
    assert_eq!(err.to_string(), "User already exists");
    assert_eq!(*h.recorder.calls.borrow(), vec!["signup"]);
    assert!(!h.store.borrow().is_signing_up);
    assert!(h.store.borrow().user.is_none());
}
