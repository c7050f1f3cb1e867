//! Food List Component
//!
//! Renders the filtered item list, or an empty state.

use leptos::prelude::*;

use crate::components::FoodCard;
use crate::inventory::{empty_state_message, is_filter_active, visible_items};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FoodList() -> impl IntoView {
    let store = use_app_store();

    let filter_active = move || {
        is_filter_active(&store.category_filter().read(), &store.search_query().read())
    };
    let visible = move || {
        visible_items(
            &store.items().read(),
            &store.category_filter().read(),
            &store.search_query().read(),
        )
    };

    view! {
        <div id="food-list" class="food-list">
            {move || {
                let items = visible();
                if items.is_empty() {
                    view! {
                        <div class="empty-state">
                            <i class="fas fa-shopping-basket"></i>
                            <p>{empty_state_message(filter_active())}</p>
                        </div>
                    }
                    .into_any()
                } else {
                    items
                        .into_iter()
                        .map(|item| view! { <FoodCard item=item /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
