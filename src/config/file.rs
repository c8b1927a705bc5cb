//! Configuration file handling

use crate::error::{ConfigError, Result};
use crate::registry::ChainMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Chains to add to the built-in registry
    #[serde(default)]
    pub chains: Vec<ChainMetadata>,
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rpc-probe")
            .join("config.toml")
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_optional(&Self::default_path())
    }

    /// Load from a path, `None` if the file does not exist
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to a specific path
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::InvalidFile(format!("Failed to create directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::InvalidFile(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Check settings and chain entries
    pub fn validate(&self) -> Result<()> {
        if self.settings.timeout_seconds == 0 {
            return Err(
                ConfigError::InvalidSetting("timeout_seconds must be greater than zero".into())
                    .into(),
            );
        }

        let mut seen = HashSet::new();
        for chain in &self.chains {
            if chain.chain_id == 0 {
                return Err(ConfigError::InvalidChain(format!(
                    "'{}' has chain_id 0",
                    chain.name
                ))
                .into());
            }
            if chain.name.trim().is_empty() {
                return Err(ConfigError::InvalidChain(format!(
                    "chain {} has an empty name",
                    chain.chain_id
                ))
                .into());
            }
            if !seen.insert(chain.chain_id) {
                return Err(ConfigError::InvalidChain(format!(
                    "chain {} declared more than once",
                    chain.chain_id
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Set the request timeout and save to `path`
    pub fn set_timeout(&mut self, seconds: u64, path: &Path) -> Result<()> {
        if seconds == 0 {
            return Err(
                ConfigError::InvalidSetting("timeout must be greater than zero".into()).into(),
            );
        }
        self.settings.timeout_seconds = seconds;
        self.save(path)
    }
}
