//! Placeholder contact list shown while contacts load.

use leptos::prelude::*;

/// Number of placeholder rows.
pub const SKELETON_CONTACTS: usize = 8;

#[component]
pub fn SidebarSkeleton() -> impl IntoView {
    view! {
        <aside class="sidebar sidebar--skeleton">
            <div class="sidebar__header">
                <span class="sidebar__title">"Contacts"</span>
            </div>
            <div class="sidebar__list">
                {(0..SKELETON_CONTACTS)
                    .map(|_| {
                        view! {
                            <div class="sidebar__row">
                                <div class="skeleton skeleton--avatar"></div>
                                <div class="sidebar__row-text">
                                    <div class="skeleton skeleton--name"></div>
                                    <div class="skeleton skeleton--status"></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}
