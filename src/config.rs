//! Gateway configuration
//!
//! The gateway base address is read once when the process builds its
//! forwarder and never changes afterwards. Tests and embedding services can
//! inject their own address through [`GatewayConfig::new`].

use std::env;
use std::time::Duration;

/// Environment variable holding the gateway base address.
pub const GATEWAY_URL_ENV: &str = "GATEWAY_URL";

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:9000";

/// Total time allowed for one upload request, including the gateway's own
/// download and storage upload.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

const UPLOAD_FROM_URL_PATH: &str = "/internal/oss/upload-from-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build the config from `GATEWAY_URL`, falling back to the local gateway.
    pub fn from_env() -> Self {
        Self::from_base_url_var(env::var(GATEWAY_URL_ENV).ok())
    }

    fn from_base_url_var(value: Option<String>) -> Self {
        let base_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());

        Self::new(base_url)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the upload-from-url endpoint
    pub fn upload_from_url_endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), UPLOAD_FROM_URL_PATH)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY_URL)
    }
}
