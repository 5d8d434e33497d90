//! Renders the toast list from context.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For each=move || toasts.get().visible key=|shown| shown.id let:shown>
                <div
                    class="toast"
                    class:toast--error=shown.toast.kind == ToastKind::Error
                    class:toast--success=shown.toast.kind == ToastKind::Success
                    on:click=move |_| toasts.update(|state| state.dismiss(shown.id))
                >
                    {shown.toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
