use crate::scraper::{Result, ScraperError, GOOGLEBOT_USER_AGENT};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const ENV_USE_STORED_OFFSET: &str = "LISTING_WATCH_USE_STORED_OFFSET";
const ENV_OFFSET_DIR: &str = "LISTING_WATCH_OFFSET_DIR";
const ENV_SITE_DOMAIN: &str = "LISTING_WATCH_SITE_DOMAIN";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Off by default: every pass then returns the full page.
    pub use_stored_offset: bool,
    pub offset_dir: PathBuf,
    pub scheme: String,
    pub site_domain: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            use_stored_offset: false,
            offset_dir: PathBuf::from("."),
            scheme: "http".to_string(),
            site_domain: "craigslist.org".to_string(),
            user_agent: GOOGLEBOT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the known keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_USE_STORED_OFFSET) {
            config.use_stored_offset = parse_flag(ENV_USE_STORED_OFFSET, &raw)?;
        }
        if let Some(dir) = lookup(ENV_OFFSET_DIR) {
            config.offset_dir = PathBuf::from(dir);
        }
        if let Some(domain) = lookup(ENV_SITE_DOMAIN) {
            config.site_domain = domain;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ScraperError::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}
