//! Stats Panel Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_app_store();
    let stats = move || store.stats().get();

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <i class="fas fa-boxes"></i>
                <span class="stat-label">"Total Items"</span>
                <span id="stat-total" class="stat-value">{move || stats().total}</span>
            </div>
            <div class="stat-card critical">
                <i class="fas fa-exclamation-circle"></i>
                <span class="stat-label">"Critical"</span>
                <span id="stat-critical" class="stat-value">{move || stats().critical}</span>
            </div>
            <div class="stat-card warning">
                <i class="fas fa-exclamation-triangle"></i>
                <span class="stat-label">"Expiring Soon"</span>
                <span id="stat-warning" class="stat-value">{move || stats().warning}</span>
            </div>
            <div class="stat-card expired">
                <i class="fas fa-skull-crossbones"></i>
                <span class="stat-label">"Expired"</span>
                <span id="stat-expired" class="stat-value">{move || stats().expired}</span>
            </div>
        </div>
    }
}
