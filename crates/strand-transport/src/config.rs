use std::time::Duration;

use serde::{Deserialize, Serialize};

/// REST endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (default: https://discord.com/api/v10)
    #[serde(default = "default_api_url")]
    pub base_url: String,

    /// Bot token, with or without the `Bot ` prefix
    #[serde(default)]
    pub token: String,

    /// Request timeout in seconds. Zero is rejected by `HttpTransport::new`;
    /// there is no way to disable the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://discord.com/api/v10".into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Token without the `Bot ` prefix.
    pub fn bare_token(&self) -> &str {
        self.token.strip_prefix("Bot ").unwrap_or(&self.token)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
