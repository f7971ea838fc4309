use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::formatter::Language;

/// Prediction client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// URL of the prediction endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Language of the rendered labels
    #[serde(default)]
    pub language: Language,
    /// User-Agent header sent with uploads
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            language: Language::default(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/predict".to_string()
}

fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_user_agent() -> String {
    concat!("letthemcook/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ClientConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with LETTHEMCOOK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: LETTHEMCOOK__ENDPOINT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`ClientConfig::load`] for the source order.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("LETTHEMCOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
