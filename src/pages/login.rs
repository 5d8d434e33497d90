//! Login page: email + password against the session client.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::session::use_session;
use crate::util::auth::install_authed_redirect;

/// Login page. Sends logged-in users home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    install_authed_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let logging_in = Memo::new(move |_| auth.with(|s| s.is_logging_in));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if logging_in.get_untracked() {
            return;
        }
        let credentials = Credentials { email: email.get_untracked(), password: password.get_untracked() };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.login(credentials).await {
                    log::debug!("login not completed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, credentials);
        }
    };

    view! {
        <div class="auth-page auth-page--login">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Welcome Back"</h1>
                    <p class="auth-card__subtitle">"Log in to continue your journey!"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
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
                    <button class="auth-button" type="submit" disabled=move || logging_in.get()>
                        {move || if logging_in.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/signup" class="auth-link">"Create one!"</a>
                </p>
            </div>
        </div>
    }
}
