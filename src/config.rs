//! Build-time Configuration

/// REST API base path, overridable at build time with `FOOD_TRACKER_API_URL`
pub const API_URL: &str = match option_env!("FOOD_TRACKER_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// Multipart endpoint for the donation form
pub const DONATE_URL: &str = "/donate";

/// How long a notification stays on screen
pub const NOTIFICATION_MS: u32 = 3_000;
