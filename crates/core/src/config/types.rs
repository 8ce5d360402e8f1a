use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

/// Remote order API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointsConfig {
    /// Base URL of the order API (e.g., "http://localhost:9876").
    /// The `/orders`, `/update`, and `/alerts` paths hang off this base.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:9876".to_string()
}

fn default_timeout() -> u32 {
    10
}
