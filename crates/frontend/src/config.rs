//! Frontend configuration

use pg_manager_http::ApiConfig;
use tracing::Level;

/// UI configuration
pub struct UiConfig;

impl UiConfig {
    /// Most verbose level forwarded to the browser console
    pub const LOG_LEVEL: Level = Level::INFO;

    /// Build-time override for the API base URL
    pub const API_URL_OVERRIDE: Option<&'static str> = option_env!("PG_MANAGER_API_URL");
}

/// Base URL for API calls.
///
/// The backend runs on the same host as the page, on its own port.
pub fn api_base_url() -> String {
    if let Some(url) = UiConfig::API_URL_OVERRIDE {
        return url.to_string();
    }

    web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .map(|host| ApiConfig::base_url_for_host(&host))
        .unwrap_or_else(|| ApiConfig::DEFAULT_BASE_URL.to_string())
}
