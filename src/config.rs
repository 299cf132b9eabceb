use anyhow::{Context, Result};
use dotenv::dotenv;
use log::LevelFilter;
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "RESIZE_";

/// Settings of the local invocation harness. The batch core itself takes none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Buckets are directories under this folder.
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("./buckets")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_root: default_storage_root(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Read `RESIZE_*` variables, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("failed to read RESIZE_* configuration")
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .context(format!("invalid log level {:?}", self.log_level))
    }
}
