//! Donation Form Submission
//!
//! Posts the donation form as multipart data and returns the server's
//! plain-text acknowledgement.

use gloo_net::http::Request;
use web_sys::FormData;

use super::{ApiError, ApiResult};

pub async fn submit_donation(url: &str, form: FormData) -> ApiResult<String> {
    let response = Request::post(url).body(form)?.send().await?;
    let text = response.text().await?;
    if response.ok() {
        Ok(text)
    } else {
        tracing::warn!(status = response.status(), "donation rejected");
        Err(ApiError::Rejected(format!("server returned {}", response.status())))
    }
}
