//! Item Endpoints
//!
//! `/items` collection and per-item requests.

use gloo_net::http::Request;
use serde::Deserialize;

use super::{read_json, rejected, Ack, ApiResult, RestApi};
use crate::models::{FoodItem, ItemPayload};

#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    success: bool,
    #[serde(default)]
    items: Vec<FoodItem>,
    #[serde(default)]
    error: Option<String>,
}

impl ItemsEnvelope {
    fn into_result(self) -> ApiResult<Vec<FoodItem>> {
        if self.success {
            Ok(self.items)
        } else {
            Err(rejected(self.error))
        }
    }
}

impl RestApi {
    pub(super) async fn get_items(&self) -> ApiResult<Vec<FoodItem>> {
        let response = Request::get(&self.items_url()).send().await?;
        let envelope: ItemsEnvelope = read_json(response).await?;
        envelope.into_result()
    }

    pub(super) async fn post_item(&self, payload: &ItemPayload) -> ApiResult<()> {
        let response = Request::post(&self.items_url()).json(payload)?.send().await?;
        read_json::<Ack>(response).await?.into_result()
    }

    pub(super) async fn put_item(&self, id: &str, payload: &ItemPayload) -> ApiResult<()> {
        let response = Request::put(&self.item_url(id)).json(payload)?.send().await?;
        read_json::<Ack>(response).await?.into_result()
    }

    pub(super) async fn patch_consume(&self, id: &str) -> ApiResult<()> {
        let url = format!("{}/consume", self.item_url(id));
        let response = Request::patch(&url).send().await?;
        read_json::<Ack>(response).await?.into_result()
    }

    pub(super) async fn delete(&self, id: &str) -> ApiResult<()> {
        let response = Request::delete(&self.item_url(id)).send().await?;
        read_json::<Ack>(response).await?.into_result()
    }
}
