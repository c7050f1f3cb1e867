//! Notification Toast
//!
//! Shows the current notification and dismisses it after a fixed delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::NOTIFICATION_MS;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NotificationToast() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Each new notification gets its own timer; a timer only clears its own id
    Effect::new(move |_| {
        if let Some(id) = store.notification().with(|n| n.as_ref().map(|n| n.id)) {
            let ctx = ctx.clone();
            Timeout::new(NOTIFICATION_MS, move || ctx.dismiss_notification(id)).forget();
        }
    });

    view! {
        {move || {
            store.notification().get().map(|n| {
                view! {
                    <div id="notification" class=n.kind.css_class() style="display: block;">
                        {n.message}
                    </div>
                }
            })
        }}
    }
}
