//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! the API base URL override and the last signed-in email (used to
//! prefill the login form).
//!
//! Configuration is stored at `~/.config/freelancehq-tui/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "freelancehq-tui";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Where the backend lives when nothing else says otherwise
const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Environment variable overriding the API base URL
const API_BASE_ENV: &str = "FREELANCEHQ_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolve the API base URL: environment, then config file, then the
    /// default. A trailing slash is trimmed so paths can join cleanly.
    pub fn api_base_url(&self) -> String {
        std::env::var(API_BASE_ENV)
            .ok()
            .or_else(|| self.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Directory holding the session file and logs.
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_default_and_trailing_slash() {
        let config = Config::default();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE);

        let config = Config {
            api_base: Some("https://api.freelancehq.test/v1/".to_string()),
            last_email: None,
        };
        assert_eq!(config.api_base_url(), "https://api.freelancehq.test/v1");
    }
}
