//! rpc-probe - Ethereum JSON-RPC endpoint validation
//!
//! A Rust library and CLI that checks whether a URL is a working JSON-RPC
//! endpoint. Four independent checks run for every target: URL syntax,
//! `eth_chainId` (resolved against a registry of known chains),
//! `eth_blockNumber` and `eth_getBalance` for the zero address.
//!
//! # Example
//!
//! ```rust,no_run
//! use rpc_probe::{ChainResolution, ProbeConfig, RpcProber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let prober = RpcProber::new(ProbeConfig::default())?;
//!
//!     let report = prober
//!         .validate("https://ethereum.publicnode.com")
//!         .finished()
//!         .await?;
//!
//!     if let ChainResolution::Known(chain) = report.chain() {
//!         println!("{} (mainnet: {})", chain.name, chain.mainnet);
//!     }
//!     println!("all valid: {}", report.all_valid());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;
pub mod registry;
pub mod rpc;

// Re-exports for convenience
pub use config::{ConfigFile, ProbeConfig, Settings, DEFAULT_TIMEOUT};
pub use error::{ConfigError, Error, OutputError, ProbeError, Result, TransportKind};
pub use output::{render, render_pretty, to_json, OutputFormat};
pub use probe::{
    BalanceProbe, BlockNumberProbe, ChainIdProbe, ChainResolution, CheckStatus, Generation,
    RpcProber, ValidationHandle, ValidationReport,
};
pub use registry::{ChainMetadata, ChainRegistry, NativeCurrency, ResolvedChainIdentity};
pub use rpc::{RpcClient, ZERO_ADDRESS};
