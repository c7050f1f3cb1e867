//! Application Context
//!
//! The store and the controller are provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::RestApi;
use crate::controller::Inventory;
use crate::store::{AppState, AppStore};
use crate::theme::Theme;

/// Controller wired to the HTTP API and the reactive store
pub type AppContext = Inventory<RestApi, AppStore>;

/// Create the store and controller and provide both to all children
pub fn provide_app_context(api_url: &str, theme: Theme) -> AppContext {
    let store = AppStore::new(AppState::new(theme));
    let ctx = Inventory::new(RestApi::new(api_url), store);
    provide_context(store);
    provide_context(ctx.clone());
    ctx
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
