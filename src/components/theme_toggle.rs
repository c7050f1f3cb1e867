//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| {
                let theme = ctx.toggle_theme();
                tracing::debug!(theme = theme.as_str(), "theme toggled");
            }
        >
            <i class=move || store.theme().get().icon_class()></i>
        </button>
    }
}
