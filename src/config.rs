use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LISTING_URL: &str = "https://hockey.nl/clubs/";
pub const DEFAULT_BASE_URL: &str = "https://hockey.nl";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overview page listing every club as a ticket.
    pub listing_url: String,
    /// Origin that relative logo and detail paths are resolved against.
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Ceiling for one full scrape pass, applied once per process.
    pub max_execution_time_secs: u64,
    pub database_path: Option<PathBuf>,
    pub logo_dir: Option<PathBuf>,
    /// Rescale logos to this percentage before saving.
    pub logo_scale: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 25,
            max_execution_time_secs: 300,
            database_path: None,
            logo_dir: None,
            logo_scale: None,
        }
    }
}

impl Config {
    /// Load from an optional `hocklubs.{toml,yaml,json}` file, then `HOCKLUBS_*`
    /// environment variables, on top of the defaults.
    pub fn load() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name("hocklubs").required(false))
            .add_source(::config::Environment::with_prefix("HOCKLUBS").try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn max_execution_time(&self) -> Duration {
        Duration::from_secs(self.max_execution_time_secs)
    }

    /// Config whose listing and origin both live on `base_url`.
    pub fn for_site(base_url: &str, listing_path: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            listing_url: format!("{}{}", base_url, listing_path),
            base_url,
            ..Default::default()
        }
    }
}
