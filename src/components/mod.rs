//! UI Components
//!
//! Leptos components for each page area.

mod food_card;
mod food_list;
mod filter_bar;
mod item_modal;
mod stats_panel;
mod theme_toggle;
mod sidebar;
mod notification_toast;
mod loading_spinner;
mod donate_form;

pub use food_card::FoodCard;
pub use food_list::FoodList;
pub use filter_bar::FilterBar;
pub use item_modal::ItemModal;
pub use stats_panel::StatsPanel;
pub use theme_toggle::ThemeToggle;
pub use sidebar::Sidebar;
pub use notification_toast::NotificationToast;
pub use loading_spinner::LoadingSpinner;
pub use donate_form::DonateForm;

/// Current UTC calendar date
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Native confirm dialog; a missing window counts as "no"
pub(crate) fn confirm_dialog(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
