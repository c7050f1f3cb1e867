//! Item Modal Form
//!
//! Form state for adding and editing items, independent of the DOM.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::inventory::date_only;
use crate::models::{FoodItem, ItemPayload};

/// Category options (value, label)
pub const CATEGORIES: &[(&str, &str)] = &[
    ("Dairy", "Dairy"),
    ("Meat", "Meat & Fish"),
    ("Vegetables", "Vegetables"),
    ("Fruits", "Fruits"),
    ("Grains", "Grains & Bakery"),
    ("Beverages", "Beverages"),
    ("Snacks", "Snacks"),
    ("Other", "Other"),
];

pub const UNITS: &[&str] = &["pcs", "kg", "g", "l", "ml", "pack"];

/// Days between today and the suggested expiry of a new item
const DEFAULT_SHELF_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("quantity must be a number")]
    InvalidQuantity,
}

/// Field values of the item form, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    /// Set when editing an existing item
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub location: String,
    pub quantity: String,
    pub unit: String,
    pub expiry_date: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: CATEGORIES[0].0.to_string(),
            location: String::new(),
            quantity: String::new(),
            unit: UNITS[0].to_string(),
            expiry_date: String::new(),
        }
    }
}

impl ItemForm {
    /// Blank form with the expiry defaulted to one week from `today`
    pub fn for_new(today: NaiveDate) -> Self {
        Self {
            expiry_date: default_expiry(today).format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Form pre-filled from a cached item
    pub fn from_item(item: &FoodItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            category: item.category.clone(),
            location: item.location.clone(),
            quantity: item.quantity.to_string(),
            unit: item.unit.clone(),
            expiry_date: date_only(&item.expiry_date).to_string(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Food Item"
        } else {
            "Add New Food Item"
        }
    }

    pub fn to_payload(&self) -> Result<ItemPayload, FormError> {
        let quantity = self
            .quantity
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite())
            .ok_or(FormError::InvalidQuantity)?;
        Ok(ItemPayload {
            name: self.name.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            quantity,
            unit: self.unit.clone(),
            expiry_date: self.expiry_date.clone(),
        })
    }
}

/// Visibility of the item modal plus the form it holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub form: ItemForm,
}

pub fn default_expiry(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(DEFAULT_SHELF_DAYS))
        .unwrap_or(today)
}
