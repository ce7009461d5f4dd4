use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use strand_models::{Activity, ActivityType, PresenceStatus, StatusKind};
use strand_transport::ApiConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub presence: PresenceConfig,
}

/// Presence broadcast by `set-status` unless overridden on the command line.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PresenceConfig {
    #[serde(default)]
    pub status: StatusKind,
    #[serde(default)]
    pub afk: bool,
    pub activity_name: Option<String>,
    /// 0 = game, 1 = streaming, 2 = listening, 3 = custom
    #[serde(default)]
    pub activity_type: ActivityType,
}

impl PresenceConfig {
    pub fn to_status(&self) -> PresenceStatus {
        PresenceStatus {
            since: None,
            game: self
                .activity_name
                .as_ref()
                .map(|name| Activity::new(name.clone(), self.activity_type)),
            status: self.status,
            afk: self.afk,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if std::path::Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            tracing::info!("Config file not found at '{}', using defaults", path);
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Environment variable overrides
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("STRAND_TOKEN") {
            self.api.token = value;
        }
        if let Some(value) = lookup("STRAND_API_URL") {
            self.api.base_url = value;
        }
    }
}
