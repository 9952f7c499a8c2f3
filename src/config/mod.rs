//! User-level configuration for scamscan
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/scamscan/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub intel: IntelConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// API keys for the optional threat-intelligence lookups
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct IntelConfig {
    /// VirusTotal API key
    pub virustotal_api_key: Option<String>,

    /// PhishTank API key
    pub phishtank_api_key: Option<String>,

    /// Google Safe Browsing API key
    pub safe_browsing_api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP API
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
        }
    }
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/scamscan/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        // Load user config
        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        // Environment variables override everything
        if let Ok(key) = std::env::var("VIRUSTOTAL_API_KEY") {
            config.intel.virustotal_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("PHISHTANK_API_KEY") {
            config.intel.phishtank_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("GOOGLE_SAFE_BROWSING_API_KEY") {
            config.intel.safe_browsing_api_key = Some(key);
        }
        if let Ok(bind) = std::env::var("SCAMSCAN_BIND") {
            config.server.bind = bind;
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("scamscan").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.intel.virustotal_api_key.is_some() {
            self.intel.virustotal_api_key = other.intel.virustotal_api_key;
        }
        if other.intel.phishtank_api_key.is_some() {
            self.intel.phishtank_api_key = other.intel.phishtank_api_key;
        }
        if other.intel.safe_browsing_api_key.is_some() {
            self.intel.safe_browsing_api_key = other.intel.safe_browsing_api_key;
        }
        if other.server.bind != ServerConfig::default().bind {
            self.server.bind = other.server.bind;
        }
    }

    /// Check if any threat-intel source is configured
    pub fn has_intel_keys(&self) -> bool {
        self.intel.virustotal_api_key.is_some()
            || self.intel.phishtank_api_key.is_some()
            || self.intel.safe_browsing_api_key.is_some()
    }
}
