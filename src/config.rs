//! Runtime configuration, read from `profscrape.toml` and the environment.

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;

use crate::rmp::DEFAULT_BASE_URL;

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "profscrape.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log level for this crate's targets when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Site root used to validate professor URLs and build school links.
    #[serde(default = "default_base_url")]
    pub rmp_base_url: String,
    /// User-Agent header sent with page requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Load from `profscrape.toml` (if present), overridden by environment variables.
    pub fn load() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::raw().only(&["log_level", "rmp_base_url", "user_agent"])),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        let mut config: Self = figment.extract()?;
        config.rmp_base_url = config.rmp_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}
