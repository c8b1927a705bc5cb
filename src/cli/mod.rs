//! CLI command modules
//!
//! Each subcommand has its own module with argument definitions and handlers.

pub mod chains;
pub mod config;
pub mod validate;

use crate::config::ConfigFile;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpc-probe")]
#[command(
    version,
    about = "Check whether a URL is a working Ethereum JSON-RPC endpoint"
)]
#[command(after_help = r#"EXAMPLES:
    # Validate an endpoint
    rpc-probe validate https://ethereum.publicnode.com

    # Machine readable report with a short timeout
    rpc-probe validate http://127.0.0.1:8545 --timeout 3 --output json

    # List known chains, including testnets
    rpc-probe chains list --testnets

    # Look up a chain by ID
    rpc-probe chains show 0x89

CHECKS:
    1. URL syntax          absolute URL with a scheme
    2. eth_chainId         resolved against the chain registry
    3. eth_blockNumber
    4. eth_getBalance      for the zero address

    Exit status is 0 only when all four checks pass.

CONFIG FILE:
    Default: ~/.config/rpc-probe/config.toml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an RPC endpoint
    Validate(validate::ValidateArgs),

    /// Inspect the chain registry
    Chains {
        #[command(subcommand)]
        action: chains::ChainsCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}

impl Cli {
    /// Config file in use: `--config` or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(ConfigFile::default_path)
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load_config(&self) -> crate::error::Result<ConfigFile> {
        let loaded = match &self.config {
            Some(path) => {
                let loaded = ConfigFile::load_optional(path)?;
                if loaded.is_none() {
                    tracing::warn!("Config file {} not found, using defaults", path.display());
                }
                loaded
            }
            None => ConfigFile::load_default()?,
        };
        Ok(loaded.unwrap_or_default())
    }
}
