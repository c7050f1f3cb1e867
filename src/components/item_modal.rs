//! Item Modal Component
//!
//! Add/edit form. Shown and hidden through its `display` style.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::form::{ItemForm, CATEGORIES, UNITS};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let field = move |get: fn(&ItemForm) -> String| move || store.modal().with(|m| get(&m.form));
    let title = move || store.modal().with(|m| m.form.title());
    let display = move || {
        if store.modal().with(|m| m.open) {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    // Input handler writing one form field
    let setter = {
        let ctx = ctx.clone();
        move |set: fn(&mut ItemForm, String)| {
            let ctx = ctx.clone();
            move |ev: web_sys::Event| {
                let value = event_target_value(&ev);
                ctx.edit_form(|form| set(form, value));
            }
        }
    };

    let on_backdrop = {
        let ctx = ctx.clone();
        move |ev: web_sys::MouseEvent| {
            if ev.target().is_some() && ev.target() == ev.current_target() {
                ctx.close_modal();
            }
        }
    };
    let on_close = {
        let ctx = ctx.clone();
        move |_| ctx.close_modal()
    };
    let on_cancel = {
        let ctx = ctx.clone();
        move |_| ctx.close_modal()
    };
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ctx = ctx.clone();
        spawn_local(async move { ctx.submit_form().await });
    };

    view! {
        <div id="item-modal" class="modal" style=display on:click=on_backdrop>
            <div class="modal-content">
                <span class="close-btn" on:click=on_close>"×"</span>
                <h2 id="modal-title">{title}</h2>
                <form id="item-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            type="text"
                            required
                            prop:value=field(|f| f.name.clone())
                            on:input=setter(|f, v| f.name = v)
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="category">"Category"</label>
                            <select
                                id="category"
                                prop:value=field(|f| f.category.clone())
                                on:change=setter(|f, v| f.category = v)
                            >
                                {CATEGORIES
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="location">"Location"</label>
                            <input
                                id="location"
                                type="text"
                                placeholder="e.g. Fridge"
                                prop:value=field(|f| f.location.clone())
                                on:input=setter(|f, v| f.location = v)
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="quantity">"Quantity"</label>
                            <input
                                id="quantity"
                                type="number"
                                min="0"
                                step="any"
                                required
                                prop:value=field(|f| f.quantity.clone())
                                on:input=setter(|f, v| f.quantity = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="unit">"Unit"</label>
                            <select
                                id="unit"
                                prop:value=field(|f| f.unit.clone())
                                on:change=setter(|f, v| f.unit = v)
                            >
                                {UNITS.iter().map(|unit| view! { <option value=*unit>{*unit}</option> }).collect_view()}
                            </select>
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="expiryDate">"Expiry Date"</label>
                        <input
                            id="expiryDate"
                            type="date"
                            required
                            prop:value=field(|f| f.expiry_date.clone())
                            on:input=setter(|f, v| f.expiry_date = v)
                        />
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary cancel-btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Save Item"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
