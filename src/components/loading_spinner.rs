//! Loading Spinner

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div
            id="loading-spinner"
            class=move || if store.loading().get() { "loading-spinner" } else { "loading-spinner hidden" }
        >
            <div class="spinner"></div>
        </div>
    }
}
