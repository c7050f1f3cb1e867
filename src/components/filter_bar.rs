//! Filter Bar Component
//!
//! Category select and search box over the item list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::CATEGORIES;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let search_ctx = ctx.clone();

    view! {
        <div class="filter-bar">
            <div class="search-box">
                <i class="fas fa-search"></i>
                <input
                    id="search-input"
                    type="search"
                    placeholder="Search by name or location..."
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| search_ctx.set_search_query(event_target_value(&ev))
                />
            </div>
            <select
                id="category-filter"
                prop:value=move || store.category_filter().get()
                on:change=move |ev| ctx.set_category_filter(event_target_value(&ev))
            >
                <option value="">"All Categories"</option>
                {CATEGORIES
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
