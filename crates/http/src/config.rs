//! Client configuration

/// Backend API configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Port the backend listens on
    pub const PORT: u16 = 8080;

    /// Path prefix every API route lives under
    pub const PATH_PREFIX: &'static str = "/api";

    /// Base URL used when no browser location is available
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api";

    /// User agent sent with every request
    pub const USER_AGENT: &'static str = "pg-manager-client/0.1.0";

    /// Build the base URL for a backend running on `host`
    pub fn base_url_for_host(host: &str) -> String {
        let host = host.trim();
        if host.is_empty() {
            return Self::DEFAULT_BASE_URL.to_string();
        }
        format!("http://{host}:{}{}", Self::PORT, Self::PATH_PREFIX)
    }
}

/// Persistent storage configuration
pub struct StorageConfig;

impl StorageConfig {
    /// Storage key holding the raw bearer token
    pub const TOKEN_KEY: &'static str = "token";
}
