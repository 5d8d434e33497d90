//! Authenticated landing route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::no_chat_selected::NoChatSelected;
use crate::components::sidebar_skeleton::SidebarSkeleton;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Home page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="home-page">
            <SidebarSkeleton/>
            <NoChatSelected/>
        </div>
    }
}
