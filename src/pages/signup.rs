//! Signup page: full name, email, password, validated before submit.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::net::types::SignupProfile;
use crate::state::auth::AuthState;
use crate::state::session::use_session;
use crate::util::auth::install_authed_redirect;
#[cfg(any(test, feature = "hydrate"))]
use crate::{
    error::SessionError,
    net::backend::AuthBackend,
    net::types::AuthUser,
    state::session::{SessionClient, SessionHooks, SessionStore},
    state::toast::Toast,
    util::validate::validate_signup,
};

/// Validate the draft and, only if every rule passes, submit it.
///
/// A failed rule is toasted and returned without contacting the backend.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn submit_signup<B, S, H>(
    session: &SessionClient<B, S, H>,
    profile: SignupProfile,
) -> Result<AuthUser, SessionError>
where
    B: AuthBackend,
    S: SessionStore,
    H: SessionHooks,
{
    if let Err(rule) = validate_signup(&profile) {
        session.notify(Toast::error(rule.to_string()));
        return Err(rule.into());
    }
    session.signup(profile).await
}

/// Signup page. Sends logged-in users home.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    install_authed_redirect(auth, use_navigate());

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let signing_up = Memo::new(move |_| auth.with(|s| s.is_signing_up));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if signing_up.get_untracked() {
            return;
        }
        let profile = SignupProfile {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = submit_signup(&session, profile).await {
                    log::debug!("signup not completed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, profile);
        }
    };

    view! {
        <div class="auth-page auth-page--signup">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Create Account"</h1>
                    <p class="auth-card__subtitle">"Step into a new dimension of connection"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-field">
                        <span class="auth-field__label">"Full Name"</span>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-field">
                        <span class="auth-field__label">"Email"</span>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <PasswordField label="Password" value=password/>
                    <button class="auth-button" type="submit" disabled=move || signing_up.get()>
                        {move || if signing_up.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login" class="auth-link">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
