//! REST API Bindings
//!
//! Frontend bindings to the inventory server, organized by resource.

mod items;
mod stats;
mod donate;

use async_trait::async_trait;
use gloo_net::http::Response;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{FoodItem, ItemPayload, Stats};

pub use donate::submit_donation;

/// Characters escaped when an item id becomes a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Response body was not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Server operations the controller depends on
#[async_trait(?Send)]
pub trait InventoryApi {
    async fn list_items(&self) -> ApiResult<Vec<FoodItem>>;
    async fn create_item(&self, payload: &ItemPayload) -> ApiResult<()>;
    async fn update_item(&self, id: &str, payload: &ItemPayload) -> ApiResult<()>;
    async fn consume_item(&self, id: &str) -> ApiResult<()>;
    async fn delete_item(&self, id: &str) -> ApiResult<()>;
    async fn fetch_stats(&self) -> ApiResult<Stats>;
}

/// HTTP implementation of [`InventoryApi`]
#[derive(Debug, Clone)]
pub struct RestApi {
    base: Arc<str>,
}

impl RestApi {
    pub fn new(base: &str) -> Self {
        Self {
            base: Arc::from(base.trim_end_matches('/')),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}", self.base, utf8_percent_encode(id, PATH_SEGMENT))
    }

    fn stats_url(&self) -> String {
        format!("{}/stats", self.base)
    }
}

/// `{ success, error? }` acknowledgement shared by every mutation
#[derive(Debug, Deserialize)]
struct Ack {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl Ack {
    fn into_result(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(rejected(self.error))
        }
    }
}

#[async_trait(?Send)]
impl InventoryApi for RestApi {
    async fn list_items(&self) -> ApiResult<Vec<FoodItem>> {
        self.get_items().await
    }

    async fn create_item(&self, payload: &ItemPayload) -> ApiResult<()> {
        self.post_item(payload).await
    }

    async fn update_item(&self, id: &str, payload: &ItemPayload) -> ApiResult<()> {
        self.put_item(id, payload).await
    }

    async fn consume_item(&self, id: &str) -> ApiResult<()> {
        self.patch_consume(id).await
    }

    async fn delete_item(&self, id: &str) -> ApiResult<()> {
        self.delete(id).await
    }

    async fn fetch_stats(&self) -> ApiResult<Stats> {
        self.get_stats().await
    }
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Rejected(error.unwrap_or_else(|| "unknown error".to_string()))
}

/// Decode a JSON envelope regardless of the HTTP status code
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(status, error = %e, "undecodable response body");
        ApiError::Decode(e.to_string())
    })
}
