//! Donation Form Component
//!
//! Multipart form for offering surplus food, posted to the donation endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::submit_donation;
use crate::config::DONATE_URL;
use crate::context::use_app_context;
use crate::notification::NotificationKind;

#[component]
pub fn DonateForm() -> impl IntoView {
    let ctx = use_app_context();
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            return;
        };
        let data = match web_sys::FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(err) => {
                tracing::error!(?err, "could not read donation form");
                return;
            }
        };

        let ctx = ctx.clone();
        set_sending.set(true);
        spawn_local(async move {
            match submit_donation(DONATE_URL, data).await {
                Ok(message) => {
                    tracing::info!("donation submitted");
                    ctx.notify(message, NotificationKind::Success);
                    form.reset();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "donation failed");
                    ctx.notify("Donation failed".to_string(), NotificationKind::Danger);
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="donate-card">
            <h2>"Donate Surplus Food"</h2>
            <p class="section-intro">"Share food you will not use before it expires. We arrange the pickup."</p>
            <form class="donate-form" enctype="multipart/form-data" on:submit=on_submit>
                <div class="form-row">
                    <div class="form-group">
                        <label for="donor-name">"Your Name"</label>
                        <input id="donor-name" name="name" type="text" required />
                    </div>
                    <div class="form-group">
                        <label for="donor-contact">"Contact"</label>
                        <input id="donor-contact" name="contact" type="text" required />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="food-type">"Food Type"</label>
                        <input id="food-type" name="food_type" type="text" required />
                    </div>
                    <div class="form-group">
                        <label for="donate-quantity">"Quantity"</label>
                        <input id="donate-quantity" name="quantity" type="text" required />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="pickup-location">"Pickup Location"</label>
                        <input id="pickup-location" name="location" type="text" required />
                    </div>
                    <div class="form-group">
                        <label for="expiry-time">"Best Before"</label>
                        <input id="expiry-time" name="expiry_time" type="datetime-local" required />
                    </div>
                </div>
                <div class="form-group">
                    <label for="food-image">"Photo"</label>
                    <input id="food-image" name="food_image" type="file" accept="image/*" required />
                </div>
                <button type="submit" class="btn btn-primary" prop:disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Donate" }}
                </button>
            </form>
        </div>
    }
}
