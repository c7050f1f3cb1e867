//! Inventory Display Utilities
//!
//! Pure helpers behind the item list: filtering, empty states and the
//! text shown on each card.

use chrono::NaiveDate;

use crate::models::FoodItem;

pub const EMPTY_INVENTORY: &str = "Your inventory is empty. Start adding some food!";
pub const NO_MATCHES: &str = "No items match your criteria.";

/// Drop consumed items, keeping server order
pub fn active_items(items: Vec<FoodItem>) -> Vec<FoodItem> {
    items.into_iter().filter(|item| !item.consumed).collect()
}

pub fn is_filter_active(category: &str, search: &str) -> bool {
    !category.is_empty() || !search.is_empty()
}

/// Items matching the category (exact) and search text (name or location, case-insensitive)
pub fn visible_items(items: &[FoodItem], category: &str, search: &str) -> Vec<FoodItem> {
    let query = search.to_lowercase();
    items
        .iter()
        .filter(|item| category.is_empty() || item.category == category)
        .filter(|item| {
            query.is_empty()
                || item.name.to_lowercase().contains(&query)
                || item.location.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

pub fn empty_state_message(filter_active: bool) -> &'static str {
    if filter_active {
        NO_MATCHES
    } else {
        EMPTY_INVENTORY
    }
}

/// Relative expiry text for a card
pub fn days_left_text(days: i64) -> String {
    match days {
        d if d < 0 => "Expired".to_string(),
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("Expires in {} days", d),
    }
}

/// Date part of an ISO date or datetime string
pub fn date_only(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

/// `M/D/YYYY`, falling back to the raw value when it is not an ISO date
pub fn format_expiry_date(value: &str) -> String {
    match NaiveDate::parse_from_str(date_only(value), "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn quantity_text(item: &FoodItem) -> String {
    if item.unit.is_empty() {
        item.quantity.to_string()
    } else {
        format!("{} {}", item.quantity, item.unit)
    }
}
