//! Chain registry commands

use crate::config::{ConfigFile, ProbeConfig};
use crate::output::OutputFormat;
use crate::registry::ChainMetadata;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ChainsCommands {
    /// List known chains
    List {
        /// Include testnets
        #[arg(long)]
        testnets: bool,

        /// Output format (pretty, json)
        #[arg(long, short, default_value = "pretty")]
        output: String,
    },

    /// Show a single chain
    Show {
        /// Chain ID, decimal or 0x-prefixed hex
        id: String,
    },
}

pub fn handle(action: &ChainsCommands, config: &ConfigFile) -> anyhow::Result<()> {
    let registry = ProbeConfig::from_file(config)?.registry();

    match action {
        ChainsCommands::List { testnets, output } => {
            let format: OutputFormat = output.parse()?;
            let chains: Vec<&ChainMetadata> =
                registry.iter().filter(|c| *testnets || !c.testnet).collect();

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&chains)?);
                return Ok(());
            }

            println!("KNOWN CHAINS ({})\n", chains.len());
            println!(
                "{:>10}  {:<28} {:<8} {}",
                "ID", "Name", "Currency", "Network"
            );
            for chain in chains {
                println!(
                    "{:>10}  {:<28} {:<8} {}",
                    chain.chain_id,
                    chain.name,
                    chain.native_currency.symbol,
                    if chain.testnet { "testnet" } else { "mainnet" }
                );
            }
        }

        ChainsCommands::Show { id } => {
            let chain_id = parse_chain_id(id)?;
            let chain = registry
                .resolve(chain_id)
                .ok_or_else(|| anyhow::anyhow!("Chain {} is not in the registry", chain_id))?;

            println!("{}", chain.name);
            println!("{}", "─".repeat(40));
            println!("Chain ID:    {} ({:#x})", chain.chain_id, chain.chain_id);
            if !chain.slug.is_empty() {
                println!("Slug:        {}", chain.slug);
            }
            println!(
                "Network:     {}",
                if chain.testnet { "testnet" } else { "mainnet" }
            );
            println!(
                "Currency:    {} ({}, {} decimals)",
                chain.native_currency.name,
                chain.native_currency.symbol,
                chain.native_currency.decimals
            );
            if let Some(url) = &chain.info_url {
                println!("Info:        {}", url);
            }
        }
    }

    Ok(())
}

/// Parse a chain ID given as decimal or `0x` hex
pub fn parse_chain_id(s: &str) -> anyhow::Result<u64> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| anyhow::anyhow!("Invalid chain ID '{}': {}", s, e))
}
