//! Top bar with profile and logout actions for logged-in users.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let logged_in = Memo::new(move |_| auth.with(AuthState::is_authenticated));
    let logging_out = Memo::new(move |_| auth.with(|s| s.is_logging_out));

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if logging_out.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.logout().await {
                    log::debug!("logout not completed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">"Chat-App"</a>
            <Show when=move || logged_in.get()>
                <nav class="navbar__actions">
                    <a href="/profile" class="navbar__link">"Profile"</a>
                    <button
                        class="navbar__link navbar__link--button"
                        disabled=move || logging_out.get()
                        on:click=on_logout.clone()
                    >
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
