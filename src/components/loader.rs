//! Full-screen spinner shown while the initial auth check runs.

use leptos::prelude::*;

#[component]
pub fn FullPageLoader() -> impl IntoView {
    view! {
        <div class="page-loader" aria-busy="true">
            <div class="page-loader__spinner"></div>
        </div>
    }
}
