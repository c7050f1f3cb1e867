//! Food Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod form;
mod inventory;
mod models;
mod notification;
mod sidebar;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!(api = config::API_URL, "starting food tracker frontend");
    mount_to_body(App);
}
