//! Welcome panel shown when no conversation is open.

use leptos::prelude::*;

#[component]
pub fn NoChatSelected() -> impl IntoView {
    view! {
        <div class="welcome">
            <div class="welcome__orb welcome__orb--primary"></div>
            <div class="welcome__orb welcome__orb--secondary"></div>
            <div class="welcome__card">
                <h1 class="welcome__title">"Welcome to Chat-App"</h1>
                <p class="welcome__subtitle">
                    "Connect with your friends and explore conversations like never before."
                </p>
            </div>
        </div>
    }
}
