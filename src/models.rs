//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Food item as returned by `GET /items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(deserialize_with = "number_or_string")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    pub expiry_date: String,
    pub status: ItemStatus,
    pub days_until_expiry: i64,
    #[serde(default)]
    pub consumed: bool,
}

/// Server-computed urgency of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Ok,
    Warning,
    Critical,
    Expired,
}

impl ItemStatus {
    /// CSS class of the card's status indicator
    pub fn css_class(self) -> &'static str {
        match self {
            ItemStatus::Ok => "ok",
            ItemStatus::Warning => "warning",
            ItemStatus::Critical => "critical",
            ItemStatus::Expired => "expired",
        }
    }

    /// Critical and expired items get their expiry line emphasised
    pub fn is_urgent(self) -> bool {
        match self {
            ItemStatus::Critical | ItemStatus::Expired => true,
            ItemStatus::Ok | ItemStatus::Warning => false,
        }
    }
}

/// Aggregate counts from `GET /stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub warning: u32,
    #[serde(default)]
    pub expired: u32,
}

/// Body of create (`POST /items`) and update (`PUT /items/{id}`) requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: String,
    pub category: String,
    pub location: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Int(n) => n.to_string(),
        Loose::Float(n) => n.to_string(),
        Loose::Text(s) => s,
    })
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        Loose::Int(n) => Ok(n as f64),
        Loose::Float(n) => Ok(n),
        Loose::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid quantity: {s:?}"))),
    }
}
