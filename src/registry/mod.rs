//! Static registry of known chains
//!
//! Consulted after a successful `eth_chainId` probe. The built-in table can be
//! extended (or overridden by ID) with chains declared in the config file.

mod defaults;

pub use defaults::builtin_chains;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Native currency of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_decimals() -> u8 {
    18
}

impl NativeCurrency {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl Default for NativeCurrency {
    fn default() -> Self {
        Self::new("Ether", "ETH", 18)
    }
}

/// Metadata for a single chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainMetadata {
    /// Numeric chain ID (EIP-155)
    pub chain_id: u64,
    /// Human readable name
    pub name: String,
    /// Short identifier
    #[serde(default)]
    pub slug: String,
    /// Whether this is a test network
    #[serde(default)]
    pub testnet: bool,
    /// Project or explorer homepage
    #[serde(default)]
    pub info_url: Option<String>,
    /// Native currency
    #[serde(default)]
    pub native_currency: NativeCurrency,
}

impl ChainMetadata {
    /// The identity reported for an endpoint that answers with this chain ID
    pub fn identity(&self) -> ResolvedChainIdentity {
        ResolvedChainIdentity {
            id: self.chain_id,
            name: self.name.clone(),
            mainnet: !self.testnet,
            info_url: self.info_url.clone(),
        }
    }
}

/// A chain ID that matched a registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChainIdentity {
    pub id: u64,
    pub name: String,
    pub mainnet: bool,
    pub info_url: Option<String>,
}

/// Lookup table from chain ID to metadata
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: BTreeMap<u64, ChainMetadata>,
}

impl ChainRegistry {
    /// Registry with only the built-in chains
    pub fn builtin() -> Self {
        Self::empty().with_chains(builtin_chains())
    }

    /// Registry with no chains at all
    pub fn empty() -> Self {
        Self {
            chains: BTreeMap::new(),
        }
    }

    /// Add chains, replacing any existing entry with the same ID
    pub fn with_chains(mut self, chains: impl IntoIterator<Item = ChainMetadata>) -> Self {
        for chain in chains {
            if let Some(previous) = self.chains.insert(chain.chain_id, chain) {
                tracing::debug!(
                    "Chain {} ({}) overridden in registry",
                    previous.chain_id,
                    previous.name
                );
            }
        }
        self
    }

    /// Look up a chain by numeric ID
    pub fn resolve(&self, chain_id: u64) -> Option<&ChainMetadata> {
        self.chains.get(&chain_id)
    }

    /// All chains, ordered by ID
    pub fn iter(&self) -> impl Iterator<Item = &ChainMetadata> {
        self.chains.values()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ethereum() {
        let registry = ChainRegistry::builtin();
        let identity = registry.resolve(1).unwrap().identity();

        assert_eq!(identity.id, 1);
        assert_eq!(identity.name, "Ethereum");
        assert!(identity.mainnet);
        assert_eq!(identity.info_url.as_deref(), Some("https://ethereum.org"));
    }

    #[test]
    fn test_resolve_testnet_is_not_mainnet() {
        let registry = ChainRegistry::builtin();
        assert!(!registry.resolve(11155111).unwrap().identity().mainnet);
    }

    #[test]
    fn test_unknown_chain() {
        let registry = ChainRegistry::builtin();
        assert!(registry.resolve(31337).is_none());
    }

    #[test]
    fn test_custom_chain_overrides_builtin() {
        let custom = ChainMetadata {
            chain_id: 1,
            name: "Forked Mainnet".to_string(),
            slug: "fork".to_string(),
            testnet: true,
            info_url: None,
            native_currency: NativeCurrency::default(),
        };
        let builtin_len = ChainRegistry::builtin().len();
        let registry = ChainRegistry::builtin().with_chains(vec![custom]);

        assert_eq!(registry.len(), builtin_len);
        assert_eq!(registry.resolve(1).unwrap().name, "Forked Mainnet");
    }

    #[test]
    fn test_iter_is_ordered() {
        let registry = ChainRegistry::builtin();
        let ids: Vec<_> = registry.iter().map(|c| c.chain_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
