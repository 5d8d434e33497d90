//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::loader::FullPageLoader;
use crate::components::navbar::Navbar;
use crate::components::toaster::Toaster;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, signup::SignUpPage};
use crate::state::auth::AuthState;
use crate::state::session::SignalHooks;
use crate::state::toast::ToastState;
use crate::util::auth::is_resolving;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, kicks off the initial auth check, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::checking());
    let toasts = RwSignal::new(ToastState::default());
    let hooks = SignalHooks { toasts, redirect: RwSignal::new(None), toast_ms: config.toast_ms };

    provide_context(config);
    provide_context(auth);
    provide_context(toasts);
    provide_context(hooks);

    #[cfg(feature = "hydrate")]
    {
        let session = crate::state::session::use_session();
        leptos::task::spawn_local(async move {
            if let Err(e) = session.check_auth().await {
                log::debug!("no active session: {e}");
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-client.css"/>
        <Title text="Chat-App"/>

        <Router>
            <RedirectListener/>
            <Navbar/>
            <Show when=move || !auth.with(is_resolving) fallback=FullPageLoader>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </Show>
            <Toaster/>
        </Router>
    }
}

/// Turns redirects requested by the session client into router navigation.
#[component]
fn RedirectListener() -> impl IntoView {
    let hooks = expect_context::<SignalHooks>();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = hooks.redirect.get() {
            hooks.redirect.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
