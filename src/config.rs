//! Runtime settings: built-in defaults overridden by `STOREFRONT_*`
//! environment variables, read once `.env` has been loaded.

use ::config::{Config as Settings, ConfigError, Environment, Map};
use serde::Deserialize;

use crate::consts::{ANNOUNCEMENT, ENV_PREFIX, HTTP_PORT};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Environment: STOREFRONT_PORT
    #[serde(rename = "port")]
    pub http_port: u16,

    /// Environment: STOREFRONT_ANNOUNCEMENT
    pub announcement: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: HTTP_PORT,
            announcement: ANNOUNCEMENT.to_string(),
        }
    }
}

impl Config {
    /// Loads the settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Loads the settings from `source`, or from the process environment
    /// when it is `None`.
    fn load(source: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let settings = Settings::builder()
            .set_default("port", i64::from(HTTP_PORT))?
            .set_default("announcement", ANNOUNCEMENT)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(source),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        if config.announcement.trim().is_empty() {
            config.announcement = ANNOUNCEMENT.to_string();
        }
        Ok(config)
    }
}
