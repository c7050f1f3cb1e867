//! Food Tracker App
//!
//! Page layout: sidebar, dashboard stats, inventory list, donation and
//! about sections, plus the item modal and notification overlays.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    today, DonateForm, FilterBar, FoodList, ItemModal, LoadingSpinner, NotificationToast, Sidebar,
    StatsPanel, ThemeToggle,
};
use crate::config::API_URL;
use crate::context::provide_app_context;
use crate::store::AppStateStoreFields;
use crate::theme::{self, Theme};

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_app_context(API_URL, theme::load_theme());
    let store = crate::store::use_app_store();

    // Reflect the theme on <html>; persist only changes made after load
    Effect::new(move |previous: Option<Theme>| {
        let current = store.theme().get();
        theme::apply_theme(current);
        if previous.is_some_and(|previous| previous != current) {
            theme::save_theme(current);
        }
        current
    });

    // Initial load
    let loader = ctx.clone();
    Effect::new(move |_| {
        let loader = loader.clone();
        spawn_local(async move { loader.load().await });
    });

    let open_add = move |_| ctx.open_modal(None, today());

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                <header class="top-bar">
                    <h1>"Food Inventory"</h1>
                    <ThemeToggle />
                </header>

                <section id="dashboard" class="page-section">
                    <h2>"Dashboard"</h2>
                    <StatsPanel />
                </section>

                <section id="home" class="page-section">
                    <div class="section-header">
                        <h2>"My Inventory"</h2>
                        <button id="add-item-btn" class="btn btn-primary" on:click=open_add>
                            <i class="fas fa-plus"></i>" Add Item"
                        </button>
                    </div>
                    <FilterBar />
                    <FoodList />
                </section>

                <section id="donate-section" class="page-section">
                    <DonateForm />
                </section>

                <section id="about-us-page" class="page-section">
                    <h2>"About Us"</h2>
                    <p>
                        "We help households keep track of what is in the fridge and pantry, "
                        "use it before it expires, and pass on what they cannot use."
                    </p>
                </section>
            </main>

            <ItemModal />
            <NotificationToast />
            <LoadingSpinner />
        </div>
    }
}
