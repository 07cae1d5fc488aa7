//! Backend connection settings

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Where the storefront backend lives and how patiently to talk to it.
///
/// ```toml
/// base_url = "https://api.rigsdock.example/api"
/// timeout_secs = 15
/// max_retries = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// 0 disables retries
    pub max_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ApiConfig {
    /// Parse and validate a TOML document; missing keys take defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| ApiError::config(format!("Invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ApiError::config(format!("Cannot read {}: {e}", path.display())))?;
        log::debug!("Loaded API config from {}", path.display());
        Self::from_toml_str(&raw)
    }

    /// Base URL must be absolute http(s); timeout must be non-zero.
    pub fn validate(&self) -> Result<()> {
        self.base()?;
        if self.timeout_secs == 0 {
            return Err(ApiError::config("timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Parsed base URL, always ending in `/` so relative paths append.
    pub fn base(&self) -> Result<Url> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|e| ApiError::config(format!("Invalid base_url {:?}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::config(format!(
                "Unsupported base_url scheme: {}",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
