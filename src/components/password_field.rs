//! Password input with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordField(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <label class="auth-field">
            <span class="auth-field__label">{label}</span>
            <span class="auth-field__row">
                <input
                    class="auth-input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    class="auth-field__toggle"
                    type="button"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </span>
        </label>
    }
}
