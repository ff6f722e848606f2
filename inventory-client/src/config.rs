//! Client configuration

use std::time::Duration;

/// Where the inventory service lives and how long to wait for it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Environment variable holding the base URL
    pub const ENV_VAR: &'static str = "INVENTORY_API_URL";
    /// Local development address used when nothing else is configured
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: Self::REQUEST_TIMEOUT,
        }
    }

    /// Join a path (starting with `/`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
