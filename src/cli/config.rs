//! Configuration management commands

use crate::config::ConfigFile;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,

    /// Show current config
    Show,

    /// Set the default request timeout
    SetTimeout {
        /// Timeout in seconds
        seconds: u64,
    },
}

pub fn handle(action: &ConfigCommands, path: &Path) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }

        ConfigCommands::Show => {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                println!("# {}\n", path.display());
                println!("{}", content);
            } else {
                println!("No config file found at: {}", path.display());
                println!("\nCreate one with:");
                println!("  rpc-probe config set-timeout 10");
            }
        }

        ConfigCommands::SetTimeout { seconds } => {
            let mut config = ConfigFile::load_optional(path)?.unwrap_or_default();
            config.set_timeout(*seconds, path)?;
            println!("Timeout set to {}s in {}", seconds, path.display());
        }
    }

    Ok(())
}
