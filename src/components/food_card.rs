//! Food Card Component
//!
//! One inventory item with its consume / edit / delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{confirm_dialog, today};
use crate::context::use_app_context;
use crate::inventory::{days_left_text, format_expiry_date, quantity_text};
use crate::models::FoodItem;

#[component]
pub fn FoodCard(item: FoodItem) -> impl IntoView {
    let ctx = use_app_context();

    let expiry_class = if item.status.is_urgent() { "expiry-text danger-text" } else { "expiry-text" };
    let expiry_text = format!("Expires: {}", format_expiry_date(&item.expiry_date));
    let days_left = format!("({})", days_left_text(item.days_until_expiry));
    let quantity = quantity_text(&item);

    let on_consume = {
        let ctx = ctx.clone();
        let id = item.id.clone();
        move |_| {
            let ctx = ctx.clone();
            let id = id.clone();
            spawn_local(async move { ctx.consume_item(&id).await });
        }
    };

    let on_edit = {
        let ctx = ctx.clone();
        let id = item.id.clone();
        move |_| ctx.open_modal(Some(&id), today())
    };

    let on_delete = {
        let id = item.id.clone();
        move |_| {
            let ctx = ctx.clone();
            let id = id.clone();
            spawn_local(async move { ctx.delete_item(&id, confirm_dialog).await });
        }
    };

    view! {
        <div class="food-card">
            <div class=format!("status-indicator {}", item.status.css_class())></div>
            <div class="food-card-content">
                <div class="food-header">
                    <h3>{item.name}</h3>
                    <span class="category-badge">{item.category}</span>
                </div>
                <div class="food-info">
                    <p><i class="fas fa-box"></i>" "{quantity}</p>
                    <p><i class="fas fa-map-marker-alt"></i>" "{item.location}</p>
                    <p class=expiry_class>
                        <i class="fas fa-calendar-alt"></i>" "{expiry_text}
                    </p>
                    <p class="days-left">{days_left}</p>
                </div>
            </div>
            <div class="food-card-actions">
                <button class="btn btn-primary btn-icon" title="Mark as Consumed" on:click=on_consume>
                    <i class="fas fa-check"></i>
                </button>
                <button class="btn btn-secondary btn-icon" title="Edit Item" on:click=on_edit>
                    <i class="fas fa-edit"></i>
                </button>
                <button class="btn btn-danger btn-icon" title="Delete Item" on:click=on_delete>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </div>
    }
}
