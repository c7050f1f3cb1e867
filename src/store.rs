//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::ModalState;
use crate::inventory::active_items;
use crate::models::{FoodItem, Stats};
use crate::notification::{Notification, NotificationKind};
use crate::theme::Theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active (non-consumed) items in server order
    pub items: Vec<FoodItem>,
    /// Category filter ("" = all)
    pub category_filter: String,
    /// Free-text search over name and location
    pub search_query: String,
    pub stats: Stats,
    /// True while the latest item fetch is in flight
    pub loading: bool,
    pub modal: ModalState,
    pub notification: Option<Notification>,
    pub theme: Theme,
    /// Sequence number of the latest issued item fetch
    pub items_request: u64,
    /// Sequence number of the latest issued stats fetch
    pub stats_request: u64,
    pub notification_seq: u64,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    /// Register a new item fetch and return its sequence number
    pub fn begin_items_request(&mut self) -> u64 {
        self.items_request += 1;
        self.loading = true;
        self.items_request
    }

    pub fn is_latest_items_request(&self, seq: u64) -> bool {
        seq == self.items_request
    }

    /// Replace the item list if `seq` is still the latest fetch.
    /// Returns whether the items were applied.
    pub fn apply_items(&mut self, seq: u64, items: Vec<FoodItem>) -> bool {
        if !self.is_latest_items_request(seq) {
            return false;
        }
        self.items = active_items(items);
        true
    }

    /// Clear the loading flag once the latest fetch settles
    pub fn finish_items_request(&mut self, seq: u64) {
        if self.is_latest_items_request(seq) {
            self.loading = false;
        }
    }

    pub fn begin_stats_request(&mut self) -> u64 {
        self.stats_request += 1;
        self.stats_request
    }

    pub fn apply_stats(&mut self, seq: u64, stats: Stats) -> bool {
        if seq != self.stats_request {
            return false;
        }
        self.stats = stats;
        true
    }

    pub fn find_item(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn push_notification(&mut self, message: String, kind: NotificationKind) -> u64 {
        self.notification_seq += 1;
        self.notification = Some(Notification {
            id: self.notification_seq,
            message,
            kind,
        });
        self.notification_seq
    }

    /// Clear the notification only if it is still the one with `id`
    pub fn dismiss_notification(&mut self, id: u64) {
        if self.notification.as_ref().is_some_and(|n| n.id == id) {
            self.notification = None;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

macro_rules! write_changed {
    ($store:expr, $next:expr, $($field:ident),* $(,)?) => {
        $(
            if $store.$field().with_untracked(|current| *current != $next.$field) {
                *$store.$field().write() = $next.$field;
            }
        )*
    };
}

/// Read/write access to [`AppState`] for the controller
pub trait StateCell: Clone + 'static {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateCell for AppStore {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.read_untracked())
    }

    /// Applies `f` to a copy, then writes back only the fields that changed so
    /// subscribers of untouched fields are not notified.
    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut next = self.with_untracked(AppState::clone);
        let result = f(&mut next);
        write_changed!(
            self,
            next,
            items,
            category_filter,
            search_query,
            stats,
            loading,
            modal,
            notification,
            theme,
            items_request,
            stats_request,
            notification_seq
        );
        result
    }
}
