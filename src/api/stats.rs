//! Stats Endpoint

use gloo_net::http::Request;
use serde::Deserialize;

use super::{read_json, rejected, ApiError, ApiResult, RestApi};
use crate::models::Stats;

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    success: bool,
    #[serde(default)]
    stats: Option<Stats>,
    #[serde(default)]
    error: Option<String>,
}

impl StatsEnvelope {
    fn into_result(self) -> ApiResult<Stats> {
        match (self.success, self.stats) {
            (true, Some(stats)) => Ok(stats),
            (true, None) => Err(ApiError::Decode("missing stats".to_string())),
            (false, _) => Err(rejected(self.error)),
        }
    }
}

impl RestApi {
    pub(super) async fn get_stats(&self) -> ApiResult<Stats> {
        let response = Request::get(&self.stats_url()).send().await?;
        let envelope: StatsEnvelope = read_json(response).await?;
        envelope.into_result()
    }
}
