//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages send
//! anonymous visitors to `/login`, and the login and signup pages send
//! logged-in users home.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session::{HOME_ROUTE, LOGIN_ROUTE};

/// True once the initial auth check has settled with nobody logged in.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_checking_auth && state.user.is_none()
}

/// True when a logged-in user lands on a login or signup route.
#[must_use]
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.user.is_some()
}

/// True while the app is still waiting to learn who the user is.
#[must_use]
pub fn is_resolving(state: &AuthState) -> bool {
    state.is_checking_auth && state.user.is_none()
}

/// Redirect to `/login` whenever auth has settled and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever a user is present.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}
