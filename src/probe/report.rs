//! Validation report snapshot

use super::CheckStatus;
use crate::error::ProbeError;
use crate::registry::ResolvedChainIdentity;
use alloy::primitives::U256;
use reqwest::Url;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Tag identifying one `validate` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Before the first validation
    pub const INITIAL: Generation = Generation(0);

    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Successful `eth_chainId` probe
#[derive(Debug, Clone, PartialEq)]
pub struct ChainIdProbe {
    /// `result` exactly as returned
    pub raw: Value,
    /// Parsed chain ID, `None` if `raw` is not a hex quantity
    pub chain_id: Option<u64>,
    /// Registry match for `chain_id`
    pub identity: Option<ResolvedChainIdentity>,
    pub latency: Duration,
}

/// Successful `eth_blockNumber` probe
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNumberProbe {
    pub block_number: Option<u64>,
    pub latency: Duration,
}

/// Successful `eth_getBalance` probe
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceProbe {
    /// Balance of the zero address in wei
    pub balance: Option<U256>,
    pub latency: Duration,
}

/// What is known about the endpoint's chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainResolution<'a> {
    /// Chain ID check not finished (or never started)
    NotProbed,
    /// Chain ID check failed
    Failed(&'a ProbeError),
    /// Chain ID read but not in the registry (or not parseable)
    Unknown { chain_id: Option<u64> },
    /// Chain ID matched a registry entry
    Known(&'a ResolvedChainIdentity),
}

/// Snapshot of the four checks for one target
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub(crate) generation: Generation,
    pub(crate) target: String,
    pub(crate) url: CheckStatus<Url>,
    pub(crate) chain_id: CheckStatus<ChainIdProbe>,
    pub(crate) block_number: CheckStatus<BlockNumberProbe>,
    pub(crate) balance: CheckStatus<BalanceProbe>,
}

impl ValidationReport {
    /// Report before any validation was requested
    pub fn idle() -> Self {
        Self {
            generation: Generation::INITIAL,
            target: String::new(),
            url: CheckStatus::NotStarted,
            chain_id: CheckStatus::NotStarted,
            block_number: CheckStatus::NotStarted,
            balance: CheckStatus::NotStarted,
        }
    }

    /// Fresh report with every check in flight
    pub(crate) fn pending(generation: Generation, target: impl Into<String>) -> Self {
        Self {
            generation,
            target: target.into(),
            url: CheckStatus::Pending,
            chain_id: CheckStatus::Pending,
            block_number: CheckStatus::Pending,
            balance: CheckStatus::Pending,
        }
    }

    /// Mark every check failed with the same error
    pub(crate) fn fail_all(&mut self, error: &ProbeError) {
        self.url = CheckStatus::Failed(error.clone());
        self.chain_id = CheckStatus::Failed(error.clone());
        self.block_number = CheckStatus::Failed(error.clone());
        self.balance = CheckStatus::Failed(error.clone());
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The URL string as supplied
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn url(&self) -> &CheckStatus<Url> {
        &self.url
    }

    pub fn chain_id(&self) -> &CheckStatus<ChainIdProbe> {
        &self.chain_id
    }

    pub fn block_number(&self) -> &CheckStatus<BlockNumberProbe> {
        &self.block_number
    }

    pub fn balance(&self) -> &CheckStatus<BalanceProbe> {
        &self.balance
    }

    /// True iff all four checks succeeded
    ///
    /// An unrecognized chain ID does not affect this.
    pub fn all_valid(&self) -> bool {
        self.url.is_success()
            && self.chain_id.is_success()
            && self.block_number.is_success()
            && self.balance.is_success()
    }

    pub fn chain(&self) -> ChainResolution<'_> {
        match &self.chain_id {
            CheckStatus::NotStarted | CheckStatus::Pending => ChainResolution::NotProbed,
            CheckStatus::Failed(e) => ChainResolution::Failed(e),
            CheckStatus::Succeeded(probe) => match &probe.identity {
                Some(identity) => ChainResolution::Known(identity),
                None => ChainResolution::Unknown {
                    chain_id: probe.chain_id,
                },
            },
        }
    }

    /// Number of checks that reached a terminal state (0 to 4)
    pub fn completed_checks(&self) -> usize {
        [
            self.url.is_terminal(),
            self.chain_id.is_terminal(),
            self.block_number.is_terminal(),
            self.balance.is_terminal(),
        ]
        .into_iter()
        .filter(|done| *done)
        .count()
    }

    /// All four checks are terminal
    pub fn is_complete(&self) -> bool {
        self.completed_checks() == 4
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::idle()
    }
}
