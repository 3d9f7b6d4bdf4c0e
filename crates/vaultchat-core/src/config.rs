//! Settings for vaultchat (stored in ~/.config/vaultchat/config.toml)
//!
//! The file holds the API credential plus the endpoint and timeout used by the
//! question-answering client. Environment variables override the stored values
//! for a single run without being written back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VaultChatError};

const CONFIG_DIR: &str = "vaultchat";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "VAULTCHAT_CONFIG_DIR";

const API_KEY_ENV_VAR: &str = "VAULTCHAT_API_KEY";
const ENDPOINT_ENV_VAR: &str = "VAULTCHAT_ENDPOINT";
const TIMEOUT_ENV_VAR: &str = "VAULTCHAT_TIMEOUT";

/// Default question-answering endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "https://kagi.com/api/v0/fastgpt";

/// Default timeout for a question-answering request
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const MIN_TIMEOUT_SECONDS: u64 = 5;
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Billing reminder shown next to the credential
pub const PRICING_NOTE: &str =
    "Each question costs 1.5¢ at the default endpoint. Make sure you have API credits at https://kagi.com/settings/billing_api";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// API credential sent as `Authorization: Bot <key>` (empty means unset)
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Settings {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    VaultChatError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            VaultChatError::Other(format!(
                "failed to read settings from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            VaultChatError::Other(format!(
                "failed to parse settings from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Persist settings to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| VaultChatError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir).map_err(|e| {
            VaultChatError::Other(format!(
                "failed to create config directory {}: {}",
                config_dir.display(),
                e
            ))
        })?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| VaultChatError::Other(format!("failed to serialize settings: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            VaultChatError::Other(format!(
                "failed to write settings to {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "settings_saved");
        Ok(())
    }

    /// Apply `VAULTCHAT_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV_VAR).filter(|s| !s.trim().is_empty()) {
            self.api_key = key;
        }

        if let Some(url) = lookup(ENDPOINT_ENV_VAR).filter(|s| !s.is_empty()) {
            self.endpoint = url;
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV_VAR) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.timeout_seconds = seconds;
            }
        }

        self.timeout_seconds = self
            .timeout_seconds
            .clamp(MIN_TIMEOUT_SECONDS, MAX_TIMEOUT_SECONDS);
        self
    }

    pub fn set_api_key(&mut self, key: &str) {
        self.api_key = key.trim().to_string();
    }

    pub fn clear_api_key(&mut self) {
        self.api_key.clear();
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// The credential with everything but its last four characters masked
    pub fn redacted_key(&self) -> String {
        if !self.has_api_key() {
            return "(not set)".to_string();
        }

        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/vaultchat/config.toml".to_string()
        }
    }
}
