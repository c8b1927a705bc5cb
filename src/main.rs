//! rpc-probe CLI - Ethereum JSON-RPC endpoint validation

use clap::Parser;
use rpc_probe::cli::{chains, config, validate, Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    match &cli.command {
        Commands::Validate(args) => {
            let config_file = cli.load_config()?;
            let valid = validate::handle(args, &config_file, cli.quiet).await?;
            if !valid {
                std::process::exit(1);
            }
        }

        Commands::Chains { action } => {
            let config_file = cli.load_config()?;
            chains::handle(action, &config_file)?;
        }

        Commands::Config { action } => {
            config::handle(action, &cli.config_path())?;
        }
    }

    Ok(())
}
