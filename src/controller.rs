//! Inventory Controller
//!
//! Every user action goes through [`Inventory`]: it talks to the server via
//! [`InventoryApi`] and is the only writer of [`AppState`].

use chrono::NaiveDate;

use crate::api::{ApiError, InventoryApi};
use crate::form::{ItemForm, ModalState};
use crate::notification::NotificationKind;
use crate::store::{AppState, StateCell};
use crate::theme::Theme;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this item?";

#[derive(Clone)]
pub struct Inventory<A, S> {
    api: A,
    state: S,
}

impl<A, S> Inventory<A, S>
where
    A: InventoryApi + Clone + 'static,
    S: StateCell,
{
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    /// Initial page load: items first, then stats
    pub async fn load(&self) {
        if !self.fetch_items().await {
            self.update_stats().await;
        }
    }

    /// Re-fetch the full item list. Returns whether a fresh list was applied
    /// (stats are refreshed in that case).
    pub async fn fetch_items(&self) -> bool {
        let seq = self.state.update_state(AppState::begin_items_request);
        let result = self.api.list_items().await;

        let applied = match result {
            Ok(items) => {
                let count = items.len();
                let applied = self.state.update_state(|s| s.apply_items(seq, items));
                if applied {
                    tracing::debug!(seq, count, "item list refreshed");
                } else {
                    tracing::debug!(seq, "discarding stale item list");
                }
                applied
            }
            Err(err) => {
                if self.state.with_state(|s| s.is_latest_items_request(seq)) {
                    let message = match &err {
                        ApiError::Rejected(msg) => format!("Error fetching items: {}", msg),
                        ApiError::Network(_) | ApiError::Decode(_) => "Network error occurred".to_string(),
                    };
                    tracing::warn!(error = %err, "fetching items failed");
                    self.notify(message, NotificationKind::Danger);
                }
                false
            }
        };
        self.state.update_state(|s| s.finish_items_request(seq));

        if applied {
            self.update_stats().await;
        }
        applied
    }

    /// Refresh the stats panel. Failures are only logged.
    pub async fn update_stats(&self) {
        let seq = self.state.update_state(AppState::begin_stats_request);
        match self.api.fetch_stats().await {
            Ok(stats) => {
                if !self.state.update_state(|s| s.apply_stats(seq, stats)) {
                    tracing::debug!(seq, "discarding stale stats");
                }
            }
            Err(err) => tracing::error!(error = %err, "stats update failed"),
        }
    }

    /// Create or update the item in the modal form
    pub async fn submit_form(&self) {
        let form = self.state.with_state(|s| s.modal.form.clone());
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notify(format!("Error: {}", err), NotificationKind::Danger);
                return;
            }
        };

        let result = match &form.id {
            Some(id) => self.api.update_item(id, &payload).await,
            None => self.api.create_item(&payload).await,
        };

        match result {
            Ok(()) => {
                let message = if form.is_edit() { "Item updated!" } else { "Item added successfully!" };
                tracing::info!(id = ?form.id, "item saved");
                self.notify(message.to_string(), NotificationKind::Success);
                self.close_modal();
                self.fetch_items().await;
            }
            Err(ApiError::Rejected(msg)) => {
                self.notify(format!("Error: {}", msg), NotificationKind::Danger);
            }
            Err(err) => {
                tracing::warn!(error = %err, "saving item failed");
                self.notify("Failed to save item".to_string(), NotificationKind::Danger);
            }
        }
    }

    pub async fn consume_item(&self, id: &str) {
        match self.api.consume_item(id).await {
            Ok(()) => {
                tracing::info!(id, "item consumed");
                self.notify("Great! Item marked as consumed.".to_string(), NotificationKind::Success);
                self.fetch_items().await;
            }
            Err(err) => self.report_action_failure(err, "Action failed"),
        }
    }

    /// Delete after `confirm` approves; declining makes no request
    pub async fn delete_item(&self, id: &str, confirm: impl FnOnce(&str) -> bool) {
        if !confirm(DELETE_CONFIRMATION) {
            return;
        }
        match self.api.delete_item(id).await {
            Ok(()) => {
                tracing::info!(id, "item deleted");
                self.notify("Item removed from inventory.".to_string(), NotificationKind::Success);
                self.fetch_items().await;
            }
            Err(err) => self.report_action_failure(err, "Delete failed"),
        }
    }

    fn report_action_failure(&self, err: ApiError, fallback: &str) {
        tracing::warn!(error = %err, "{}", fallback);
        let message = match err {
            ApiError::Rejected(msg) => format!("Error: {}", msg),
            ApiError::Network(_) | ApiError::Decode(_) => fallback.to_string(),
        };
        self.notify(message, NotificationKind::Danger);
    }

    /// Open the modal in add mode, or in edit mode for a cached item.
    /// An id missing from the cached list opens a fresh add form.
    pub fn open_modal(&self, id: Option<&str>, today: NaiveDate) {
        self.state.update_state(|s| {
            let form = match id.and_then(|id| s.find_item(id)) {
                Some(item) => ItemForm::from_item(item),
                None => {
                    if let Some(id) = id {
                        tracing::warn!(id, "edit requested for unknown item");
                    }
                    ItemForm::for_new(today)
                }
            };
            s.modal = ModalState { open: true, form };
        });
    }

    pub fn close_modal(&self) {
        self.state.update_state(|s| s.modal.open = false);
    }

    pub fn edit_form(&self, f: impl FnOnce(&mut ItemForm)) {
        self.state.update_state(|s| f(&mut s.modal.form));
    }

    pub fn set_category_filter(&self, category: String) {
        self.state.update_state(|s| s.category_filter = category);
    }

    pub fn set_search_query(&self, query: String) {
        self.state.update_state(|s| s.search_query = query);
    }

    /// Flip the theme and return the new one
    pub fn toggle_theme(&self) -> Theme {
        self.state.update_state(|s| {
            s.theme = s.theme.toggled();
            s.theme
        })
    }

    pub fn notify(&self, message: String, kind: NotificationKind) -> u64 {
        self.state.update_state(|s| s.push_notification(message, kind))
    }

    pub fn dismiss_notification(&self, id: u64) {
        self.state.update_state(|s| s.dismiss_notification(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResult;
    use crate::models::{FoodItem, ItemPayload, ItemStatus, Stats};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::rc::Rc;

    impl StateCell for Rc<RefCell<AppState>> {
        fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
            f(&self.borrow())
        }

        fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
            f(&mut self.borrow_mut())
        }
    }

    struct MockServer {
        items: ApiResult<Vec<FoodItem>>,
        stats: ApiResult<Stats>,
        mutation: ApiResult<()>,
        calls: Vec<String>,
    }

    #[derive(Clone)]
    struct MockApi(Rc<RefCell<MockServer>>);

    impl MockApi {
        fn new(items: Vec<FoodItem>) -> Self {
            Self(Rc::new(RefCell::new(MockServer {
                items: Ok(items),
                stats: Ok(Stats { total: 2, critical: 1, warning: 0, expired: 1 }),
                mutation: Ok(()),
                calls: Vec::new(),
            })))
        }

        fn calls(&self) -> Vec<String> {
            self.0.borrow().calls.clone()
        }

        fn record(&self, call: String) {
            self.0.borrow_mut().calls.push(call);
        }
    }

    #[async_trait(?Send)]
    impl InventoryApi for MockApi {
        async fn list_items(&self) -> ApiResult<Vec<FoodItem>> {
            self.record("GET /items".to_string());
            self.0.borrow().items.clone()
        }

        async fn create_item(&self, payload: &ItemPayload) -> ApiResult<()> {
            self.record(format!("POST /items {}", payload.name));
            self.0.borrow().mutation.clone()
        }

        async fn update_item(&self, id: &str, payload: &ItemPayload) -> ApiResult<()> {
            self.record(format!("PUT /items/{} {}", id, payload.name));
            self.0.borrow().mutation.clone()
        }

        async fn consume_item(&self, id: &str) -> ApiResult<()> {
            self.record(format!("PATCH /items/{}/consume", id));
            self.0.borrow().mutation.clone()
        }

        async fn delete_item(&self, id: &str) -> ApiResult<()> {
            self.record(format!("DELETE /items/{}", id));
            self.0.borrow().mutation.clone()
        }

        async fn fetch_stats(&self) -> ApiResult<Stats> {
            self.record("GET /stats".to_string());
            self.0.borrow().stats.clone()
        }
    }

    type TestInventory = Inventory<MockApi, Rc<RefCell<AppState>>>;

    fn make_item(id: &str, consumed: bool) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: "Dairy".to_string(),
            location: "Fridge".to_string(),
            quantity: 2.0,
            unit: "pcs".to_string(),
            expiry_date: "2026-10-20T00:00:00.000Z".to_string(),
            status: ItemStatus::Warning,
            days_until_expiry: 4,
            consumed,
        }
    }

    fn setup(items: Vec<FoodItem>) -> (TestInventory, MockApi, Rc<RefCell<AppState>>) {
        let api = MockApi::new(items);
        let state = Rc::new(RefCell::new(AppState::default()));
        (Inventory::new(api.clone(), state.clone()), api, state)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn item_ids(state: &Rc<RefCell<AppState>>) -> Vec<String> {
        state.borrow().items.iter().map(|i| i.id.clone()).collect()
    }

    fn notification(state: &Rc<RefCell<AppState>>) -> Option<(String, NotificationKind)> {
        state.borrow().notification.as_ref().map(|n| (n.message.clone(), n.kind))
    }

    #[tokio::test]
    async fn test_fetch_items_filters_consumed_and_updates_stats() {
        let (inventory, api, state) = setup(vec![
            make_item("1", false),
            make_item("2", true),
            make_item("3", false),
        ]);

        assert!(inventory.fetch_items().await);

        assert_eq!(item_ids(&state), vec!["1", "3"]);
        assert!(!state.borrow().loading);
        assert_eq!(state.borrow().stats.total, 2);
        assert_eq!(api.calls(), vec!["GET /items", "GET /stats"]);
    }

    #[tokio::test]
    async fn test_fetch_items_rejected_shows_server_error() {
        let (inventory, api, state) = setup(vec![make_item("1", false)]);
        inventory.fetch_items().await;

        api.0.borrow_mut().items = Err(ApiError::Rejected("db locked".to_string()));
        assert!(!inventory.fetch_items().await);

        assert_eq!(item_ids(&state), vec!["1"]);
        assert!(!state.borrow().loading);
        assert_eq!(
            notification(&state),
            Some(("Error fetching items: db locked".to_string(), NotificationKind::Danger))
        );
    }

    #[tokio::test]
    async fn test_fetch_items_network_error() {
        let (inventory, api, state) = setup(Vec::new());
        api.0.borrow_mut().items = Err(ApiError::Network("offline".to_string()));

        assert!(!inventory.fetch_items().await);

        assert!(!state.borrow().loading);
        assert_eq!(
            notification(&state),
            Some(("Network error occurred".to_string(), NotificationKind::Danger))
        );
        assert_eq!(api.calls(), vec!["GET /items"]);
    }

    #[tokio::test]
    async fn test_load_fetches_stats_even_when_items_fail() {
        let (inventory, api, state) = setup(Vec::new());
        api.0.borrow_mut().items = Err(ApiError::Decode("eof".to_string()));

        inventory.load().await;

        assert_eq!(api.calls(), vec!["GET /items", "GET /stats"]);
        assert_eq!(state.borrow().stats.expired, 1);
    }

    #[tokio::test]
    async fn test_stats_failure_is_silent() {
        let (inventory, api, state) = setup(Vec::new());
        api.0.borrow_mut().stats = Err(ApiError::Network("offline".to_string()));

        inventory.update_stats().await;

        assert_eq!(state.borrow().stats, Stats::default());
        assert!(notification(&state).is_none());
    }

    #[tokio::test]
    async fn test_submit_creates_new_item() {
        let (inventory, api, state) = setup(Vec::new());
        inventory.open_modal(None, today());
        inventory.edit_form(|f| {
            f.name = "Butter".to_string();
            f.quantity = "1".to_string();
        });

        inventory.submit_form().await;

        assert_eq!(api.calls(), vec!["POST /items Butter", "GET /items", "GET /stats"]);
        assert!(!state.borrow().modal.open);
        assert_eq!(
            notification(&state),
            Some(("Item added successfully!".to_string(), NotificationKind::Success))
        );
    }

    #[tokio::test]
    async fn test_submit_updates_existing_item() {
        let (inventory, api, state) = setup(vec![make_item("7", false)]);
        inventory.fetch_items().await;
        inventory.open_modal(Some("7"), today());
        inventory.edit_form(|f| f.name = "Skyr".to_string());

        inventory.submit_form().await;

        assert_eq!(api.calls()[2], "PUT /items/7 Skyr");
        assert_eq!(
            notification(&state),
            Some(("Item updated!".to_string(), NotificationKind::Success))
        );
    }

    #[tokio::test]
    async fn test_submit_rejected_keeps_modal_open() {
        let (inventory, api, state) = setup(Vec::new());
        api.0.borrow_mut().mutation = Err(ApiError::Rejected("name required".to_string()));
        inventory.open_modal(None, today());
        inventory.edit_form(|f| {
            f.name = "Jam".to_string();
            f.quantity = "2".to_string();
        });

        inventory.submit_form().await;

        let current = state.borrow().modal.clone();
        assert!(current.open);
        assert_eq!(current.form.name, "Jam");
        assert_eq!(
            notification(&state),
            Some(("Error: name required".to_string(), NotificationKind::Danger))
        );
        assert_eq!(api.calls(), vec!["POST /items Jam"]);
    }

    #[tokio::test]
    async fn test_submit_network_failure() {
        let (inventory, api, state) = setup(Vec::new());
        api.0.borrow_mut().mutation = Err(ApiError::Network("offline".to_string()));
        inventory.open_modal(None, today());
        inventory.edit_form(|f| f.quantity = "3".to_string());

        inventory.submit_form().await;

        assert!(state.borrow().modal.open);
        assert_eq!(
            notification(&state),
            Some(("Failed to save item".to_string(), NotificationKind::Danger))
        );
    }

    #[tokio::test]
    async fn test_submit_invalid_quantity_sends_nothing() {
        let (inventory, api, state) = setup(Vec::new());
        inventory.open_modal(None, today());
        inventory.edit_form(|f| f.quantity = "some".to_string());

        inventory.submit_form().await;

        assert!(api.calls().is_empty());
        assert_eq!(
            notification(&state),
            Some(("Error: quantity must be a number".to_string(), NotificationKind::Danger))
        );
    }

    #[tokio::test]
    async fn test_consume_success_refetches() {
        let (inventory, api, state) = setup(vec![make_item("1", false)]);
        inventory.fetch_items().await;
        api.0.borrow_mut().items = Ok(vec![make_item("1", true)]);

        inventory.consume_item("1").await;

        assert!(item_ids(&state).is_empty());
        assert_eq!(api.calls()[2], "PATCH /items/1/consume");
        assert_eq!(
            notification(&state),
            Some(("Great! Item marked as consumed.".to_string(), NotificationKind::Success))
        );
    }

    #[tokio::test]
    async fn test_consume_network_failure_leaves_items() {
        let (inventory, api, state) = setup(vec![make_item("1", false), make_item("2", false)]);
        inventory.fetch_items().await;
        let before = state.borrow().items.clone();
        api.0.borrow_mut().mutation = Err(ApiError::Network("offline".to_string()));

        inventory.consume_item("1").await;

        assert_eq!(state.borrow().items, before);
        assert_eq!(
            notification(&state),
            Some(("Action failed".to_string(), NotificationKind::Danger))
        );
        assert_eq!(api.calls().last().map(String::as_str), Some("PATCH /items/1/consume"));
    }

    #[tokio::test]
    async fn test_delete_declined_makes_no_request() {
        let (inventory, api, state) = setup(vec![make_item("1", false)]);
        inventory.fetch_items().await;
        let calls_before = api.calls().len();
        let mut asked = None;

        inventory
            .delete_item("1", |message| {
                asked = Some(message.to_string());
                false
            })
            .await;

        assert_eq!(asked.as_deref(), Some(DELETE_CONFIRMATION));
        assert_eq!(api.calls().len(), calls_before);
        assert_eq!(item_ids(&state), vec!["1"]);
        assert!(notification(&state).is_none());
    }

    #[tokio::test]
    async fn test_delete_confirmed() {
        let (inventory, api, state) = setup(vec![make_item("1", false)]);
        inventory.fetch_items().await;
        api.0.borrow_mut().items = Ok(Vec::new());

        inventory.delete_item("1", |_| true).await;

        assert!(api.calls().contains(&"DELETE /items/1".to_string()));
        assert!(item_ids(&state).is_empty());
        assert_eq!(
            notification(&state),
            Some(("Item removed from inventory.".to_string(), NotificationKind::Success))
        );
    }

    #[tokio::test]
    async fn test_delete_network_failure() {
        let (inventory, api, state) = setup(vec![make_item("1", false)]);
        inventory.fetch_items().await;
        api.0.borrow_mut().mutation = Err(ApiError::Network("offline".to_string()));

        inventory.delete_item("1", |_| true).await;

        assert_eq!(item_ids(&state), vec!["1"]);
        assert_eq!(
            notification(&state),
            Some(("Delete failed".to_string(), NotificationKind::Danger))
        );
    }

    #[tokio::test]
    async fn test_open_modal_for_cached_item() {
        let (inventory, _api, state) = setup(vec![make_item("5", false)]);
        inventory.fetch_items().await;

        inventory.open_modal(Some("5"), today());

        let modal = state.borrow().modal.clone();
        assert!(modal.open);
        assert_eq!(modal.form.id.as_deref(), Some("5"));
        assert_eq!(modal.form.name, "Item 5");
        assert_eq!(modal.form.category, "Dairy");
        assert_eq!(modal.form.location, "Fridge");
        assert_eq!(modal.form.quantity, "2");
        assert_eq!(modal.form.unit, "pcs");
        assert_eq!(modal.form.expiry_date, "2026-10-20");
        assert_eq!(modal.form.title(), "Edit Food Item");
    }

    #[test]
    fn test_open_modal_defaults_expiry() {
        let (inventory, _api, state) = setup(Vec::new());
        inventory.open_modal(None, today());

        let modal = state.borrow().modal.clone();
        assert!(modal.open);
        assert_eq!(modal.form.expiry_date, "2026-10-23");
        assert_eq!(modal.form.title(), "Add New Food Item");

        inventory.close_modal();
        assert!(!state.borrow().modal.open);
    }

    #[test]
    fn test_open_modal_unknown_id_opens_add_form() {
        let (inventory, _api, state) = setup(Vec::new());
        inventory.open_modal(Some("missing"), today());

        let modal = state.borrow().modal.clone();
        assert!(modal.open);
        assert!(modal.form.id.is_none());
        assert_eq!(modal.form.title(), "Add New Food Item");
        assert_eq!(modal.form.expiry_date, "2026-10-23");
    }

    #[test]
    fn test_reopening_resets_form() {
        let (inventory, _api, state) = setup(Vec::new());
        inventory.open_modal(None, today());
        inventory.edit_form(|f| f.name = "Leftover".to_string());
        inventory.close_modal();
        inventory.open_modal(None, today());
        assert!(state.borrow().modal.form.name.is_empty());
    }

    #[test]
    fn test_toggle_theme_twice() {
        let (inventory, _api, state) = setup(Vec::new());
        let original = state.borrow().theme;

        assert_eq!(inventory.toggle_theme(), original.toggled());
        assert_eq!(inventory.toggle_theme(), original);
        assert_eq!(state.borrow().theme.icon_class(), original.icon_class());
    }

    #[test]
    fn test_filters_are_stored() {
        let (inventory, _api, state) = setup(Vec::new());
        inventory.set_category_filter("Fruits".to_string());
        inventory.set_search_query("apple".to_string());
        assert_eq!(state.borrow().category_filter, "Fruits");
        assert_eq!(state.borrow().search_query, "apple");
    }
}
