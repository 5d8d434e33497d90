//! Profile page: avatar upload and name/email editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edit mode is a `ProfileEditor` in a local signal. The avatar path encodes
//! the chosen file, previews it, then submits it; a failed encode or upload
//! falls back to the stored avatar. The upload control stays disabled from
//! the moment a file is picked until its upload settles.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::DEFAULT_AVATAR;
use crate::state::auth::AuthState;
use crate::state::profile::{CommitError, ProfileEditor};
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;
#[cfg(any(test, feature = "hydrate"))]
use crate::{
    error::{EncodeError, SessionError},
    net::backend::AuthBackend,
    net::types::{AuthUser, ProfileUpdate},
    state::auth::RequestKind,
    state::session::{SessionClient, SessionHooks, SessionStore},
    state::toast::Toast,
};

/// Submit an encoded avatar. The preview is shown before the request goes
/// out and withdrawn if the request fails.
///
/// While another avatar upload is in flight nothing is previewed or sent, so
/// the pending upload keeps its preview.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn submit_avatar<B, S, H>(
    session: &SessionClient<B, S, H>,
    encoded: Result<String, EncodeError>,
    preview: impl Fn(Option<String>),
) -> Result<AuthUser, SessionError>
where
    B: AuthBackend,
    S: SessionStore,
    H: SessionHooks,
{
    let data_url = match encoded {
        Ok(data_url) => data_url,
        Err(e) => {
            log::warn!("avatar encoding failed: {e}");
            session.notify(Toast::error(e.to_string()));
            return Err(e.into());
        }
    };
    if session.store().snapshot().in_flight(RequestKind::UpdateProfile) {
        log::debug!("avatar ignored: profile update already in flight");
        return Err(SessionError::Busy(RequestKind::UpdateProfile));
    }
    preview(Some(data_url.clone()));
    let result = session.update_profile(ProfileUpdate::avatar(data_url)).await;
    match &result {
        Ok(_) | Err(SessionError::Busy(_)) => {}
        Err(_) => preview(None),
    }
    result
}

/// Send a committed draft. Returns `None` when the commit produced no
/// request, otherwise whether the update succeeded.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) async fn submit_draft<B, S, H>(
    session: &SessionClient<B, S, H>,
    commit: Result<ProfileUpdate, CommitError>,
) -> Option<bool>
where
    B: AuthBackend,
    S: SessionStore,
    H: SessionHooks,
{
    match commit {
        Ok(update) => Some(session.update_profile(update).await.is_ok()),
        Err(CommitError::Invalid(rule)) => {
            session.notify(Toast::error(rule.to_string()));
            None
        }
        Err(e) => {
            log::debug!("profile save skipped: {e}");
            None
        }
    }
}

/// Profile page. Requires a logged-in user.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    install_unauth_redirect(auth, use_navigate());

    let editor = RwSignal::new(ProfileEditor::default());
    let selected_img = RwSignal::new(None::<String>);
    let updating = Memo::new(move |_| auth.with(|s| s.is_updating_profile));
    let encoding = RwSignal::new(false);
    let uploading = move || updating.get() || encoding.get();

    let avatar_src = move || {
        selected_img.get().unwrap_or_else(|| {
            auth.with(|s| s.user.as_ref().map_or_else(|| DEFAULT_AVATAR.to_owned(), |u| u.avatar_src().to_owned()))
        })
    };
    let full_name = move || {
        auth.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.full_name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "No Name Available".to_owned())
        })
    };
    let email = move || {
        auth.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.email.clone())
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "No Email Available".to_owned())
        })
    };
    let member_since =
        move || auth.with(|s| s.user.as_ref().map_or_else(|| "N/A".to_owned(), |u| u.member_since().to_owned()));
    let draft_name = move || editor.with(|e| e.draft().map(|d| d.full_name.clone()).unwrap_or_default());
    let draft_email = move || editor.with(|e| e.draft().map(|d| d.email.clone()).unwrap_or_default());

    let avatar_limit = expect_context::<ClientConfig>().max_avatar_bytes;
    let upload_session = session.clone();
    let on_file = move |ev: leptos::ev::Event| {
        if updating.get_untracked() || encoding.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(target) = ev.target() else {
                return;
            };
            let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            encoding.set(true);
            let session = upload_session.clone();
            leptos::task::spawn_local(async move {
                let encoded = crate::util::image::encode_file(&file, avatar_limit).await;
                let result = submit_avatar(&session, encoded, move |src| selected_img.set(src)).await;
                encoding.set(false);
                if let Err(e) = result {
                    log::debug!("avatar update not completed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &upload_session, avatar_limit);
        }
    };

    let on_edit = move |_: leptos::ev::MouseEvent| editor.update(|e| e.begin_edit(auth.get_untracked().user.as_ref()));
    let on_cancel = move |_: leptos::ev::MouseEvent| {
        editor.update(|e| {
            e.cancel();
        });
    };
    let on_save = move |_: leptos::ev::MouseEvent| {
        let mut commit = Err(CommitError::NotEditing);
        editor.update(|e| commit = e.commit());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Some(succeeded) = submit_draft(&session, commit).await {
                    editor.update(|e| e.settle(succeeded));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, commit);
        }
    };

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <div class="profile-card__header">
                    <h1>"Profile"</h1>
                    <p>"Your profile information"</p>
                </div>

                <div class="profile-card__body">
                    <div class="profile-avatar">
                        <img class="profile-avatar__image" src=avatar_src alt="Profile"/>
                        <label
                            class="profile-avatar__upload"
                            class:profile-avatar__upload--busy=uploading
                            for="avatar-upload"
                        >
                            "Change"
                            <input
                                id="avatar-upload"
                                type="file"
                                class="profile-avatar__input"
                                accept="image/*"
                                disabled=uploading
                                on:change=on_file
                            />
                        </label>
                        <p class="profile-avatar__caption">
                            {move || {
                                if uploading() {
                                    "Uploading..."
                                } else {
                                    "Click the camera icon to update your photo"
                                }
                            }}
                        </p>
                    </div>

                    <div class="profile-fields">
                        <div class="profile-field">
                            <span class="profile-field__label">"Full Name"</span>
                            <Show
                                when=move || editor.with(ProfileEditor::is_editing)
                                fallback=move || view! { <p class="profile-field__value">{full_name}</p> }
                            >
                                <input
                                    class="profile-field__input"
                                    type="text"
                                    prop:value=draft_name
                                    on:input=move |ev| editor.update(|e| e.set_full_name(event_target_value(&ev)))
                                />
                            </Show>
                        </div>

                        <div class="profile-field">
                            <span class="profile-field__label">"Email Address"</span>
                            <Show
                                when=move || editor.with(ProfileEditor::is_editing)
                                fallback=move || view! { <p class="profile-field__value">{email}</p> }
                            >
                                <input
                                    class="profile-field__input"
                                    type="email"
                                    prop:value=draft_email
                                    on:input=move |ev| editor.update(|e| e.set_email(event_target_value(&ev)))
                                />
                            </Show>
                        </div>

                        <Show
                            when=move || editor.with(ProfileEditor::is_editing)
                            fallback=move || {
                                view! {
                                    <button class="btn btn--primary" on:click=on_edit>"Edit Profile"</button>
                                    <div class="profile-account">
                                        <h2>"Account Information"</h2>
                                        <div class="profile-account__row">
                                            <span>"Member Since"</span>
                                            <span>{member_since}</span>
                                        </div>
                                        <div class="profile-account__row">
                                            <span>"Account Status"</span>
                                            <span class="profile-account__status">"Active"</span>
                                        </div>
                                    </div>
                                }
                            }
                        >
                            <div class="profile-actions">
                                <button
                                    class="btn btn--success"
                                    disabled=move || updating.get() || editor.with(ProfileEditor::is_saving)
                                    on:click=on_save.clone()
                                >
                                    "Save"
                                </button>
                                <button
                                    class="btn"
                                    disabled=move || editor.with(ProfileEditor::is_saving)
                                    on:click=on_cancel
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
