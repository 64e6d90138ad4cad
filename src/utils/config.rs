//! Application configuration

use crate::utils::error::TikloaderError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const ENV_BACKEND_URL: &str = "TIKLOADER_BACKEND_URL";
pub const ENV_ENDPOINT: &str = "TIKLOADER_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "TIKLOADER_TIMEOUT_SECS";

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the resolver backend, without the endpoint path
    pub backend_url: String,

    /// Endpoint path appended to `backend_url`
    pub endpoint_path: String,

    /// Optional whole-request timeout. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8080".to_string(),
            endpoint_path: "download".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl AppSettings {
    /// Resolve settings from defaults, the config file and the environment.
    ///
    /// An explicit `path` must exist. Without one, the per-user config file
    /// is read only if present.
    pub fn load(path: Option<&Path>) -> Result<Self, TikloaderError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(default) if default.is_file() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        settings.apply_env_from(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, TikloaderError> {
        info!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&raw)?;
        Ok(settings)
    }

    /// Apply overrides from an environment-like lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            debug!("{} override: {}", ENV_BACKEND_URL, url);
            self.backend_url = url;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            debug!("{} override: {}", ENV_ENDPOINT, endpoint);
            self.endpoint_path = endpoint;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => {
                    debug!("{} override: {}", ENV_TIMEOUT_SECS, secs);
                    self.request_timeout_secs = Some(secs);
                }
                Err(e) => warn!(
                    "Ignoring {}={:?}, expected whole seconds: {}",
                    ENV_TIMEOUT_SECS, raw, e
                ),
            }
        }
    }

    /// Check the values a request depends on and normalize the timeout.
    pub fn validate(mut self) -> Result<Self, TikloaderError> {
        let base = self.backend_url.trim();
        if base.is_empty() {
            return Err(TikloaderError::ConfigError(
                "backend_url must not be empty".to_string(),
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(TikloaderError::ConfigError(format!(
                "backend_url must be an http(s) URL, got {}",
                base
            )));
        }
        if self.endpoint_path.trim().trim_matches('/').is_empty() {
            return Err(TikloaderError::ConfigError(
                "endpoint_path must not be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            self.request_timeout_secs = None;
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `<config_dir>/tikloader/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tikloader").join("config.json"))
}
