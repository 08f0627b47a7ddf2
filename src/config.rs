//! Application configuration
//!
//! Loaded from a JSON file; every field has a default so a partial file
//! (or no file at all) is valid.

use crate::chart::ChartWindow;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Default quote provider endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/";

/// Intraday bucket sizes the provider accepts
pub const INTRADAY_INTERVALS: [&str; 5] = ["1min", "5min", "15min", "30min", "60min"];

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub storage: StorageConfig,
    pub chart: ChartConfig,
}

/// Quote provider client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub intraday_interval: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "demo".to_string(),
            timeout_secs: 30,
            intraday_interval: "5min".to_string(),
        }
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    File,
    Memory,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Chart configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub window: ChartWindow,
}

impl Config {
    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        self.provider.validate()
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> Result<()> {
        self.endpoint()?;

        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("API key must not be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config("Timeout must be at least one second".to_string()));
        }

        if !INTRADAY_INTERVALS.contains(&self.intraday_interval.as_str()) {
            return Err(AppError::Config(format!(
                "Invalid intraday interval: {}. Valid options: {}",
                self.intraday_interval,
                INTRADAY_INTERVALS.join(", ")
            )));
        }

        Ok(())
    }

    /// Resolve the provider's `query` endpoint from the base URL
    pub fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

        base.join("query")
            .map_err(|e| AppError::Config(format!("Invalid base URL {}: {}", self.base_url, e)))
    }
}
