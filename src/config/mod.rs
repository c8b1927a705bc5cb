//! Configuration for the prober

pub mod file;

pub use file::{ConfigFile, Settings};

use crate::error::{ConfigError, Result};
use crate::registry::{ChainMetadata, ChainRegistry};
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime configuration for [`RpcProber`](crate::RpcProber)
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Hard timeout for each HTTP request
    pub timeout: Duration,
    /// Chains added to the built-in registry
    pub chains: Vec<ChainMetadata>,
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            chains: Vec::new(),
        }
    }

    /// Build from a loaded config file
    pub fn from_file(file: &ConfigFile) -> Result<Self> {
        file.validate()?;
        Ok(Self {
            timeout: Duration::from_secs(file.settings.timeout_seconds),
            chains: file.chains.clone(),
        })
    }

    /// Builder-style setter for timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style setter adding a custom chain
    pub fn with_chain(mut self, chain: ChainMetadata) -> Self {
        self.chains.push(chain);
        self
    }

    /// Registry of built-in chains plus the configured ones
    pub fn registry(&self) -> ChainRegistry {
        ChainRegistry::builtin().with_chains(self.chains.iter().cloned())
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(
                ConfigError::InvalidSetting("timeout must be greater than zero".into()).into(),
            );
        }
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NativeCurrency;

    #[test]
    fn test_defaults() {
        let config = ProbeConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.chains.is_empty());
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ProbeConfig::new().with_timeout(Duration::ZERO);
        assert!(config.check().is_err());
    }

    #[test]
    fn test_registry_includes_custom_chain() {
        let config = ProbeConfig::new().with_chain(ChainMetadata {
            chain_id: 31337,
            name: "Anvil".to_string(),
            slug: "anvil".to_string(),
            testnet: true,
            info_url: None,
            native_currency: NativeCurrency::default(),
        });

        let registry = config.registry();
        assert_eq!(registry.resolve(31337).unwrap().name, "Anvil");
        assert!(registry.resolve(1).is_some());
    }
}
