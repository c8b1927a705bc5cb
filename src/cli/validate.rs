//! Endpoint validation command

use crate::config::{ConfigFile, ProbeConfig};
use crate::output::{self, OutputFormat};
use crate::probe::RpcProber;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Args)]
pub struct ValidateArgs {
    /// RPC URL to validate
    pub url: String,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format (pretty, json)
    #[arg(long, short, default_value = "pretty")]
    pub output: String,
}

/// Run all checks against `args.url` and print the report
///
/// Returns whether the endpoint passed every check.
pub async fn handle(args: &ValidateArgs, config: &ConfigFile, quiet: bool) -> anyhow::Result<bool> {
    let format: OutputFormat = args.output.parse()?;

    let mut probe_config = ProbeConfig::from_file(config)?;
    if let Some(secs) = args.timeout {
        if secs == 0 {
            anyhow::bail!("--timeout must be greater than zero");
        }
        probe_config = probe_config.with_timeout(Duration::from_secs(secs));
    }

    let prober = RpcProber::new(probe_config)?;
    let mut updates = prober.subscribe();

    let spinner = if !quiet && format == OutputFormat::Pretty {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Validating {}", args.url));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let progress = spinner.clone().map(|pb| {
        tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                let done = updates.borrow_and_update().completed_checks();
                pb.set_message(format!("{}/4 checks complete", done));
            }
        })
    });

    let report = prober.validate(args.url.clone()).finished().await?;

    if let Some(task) = progress {
        task.abort();
    }
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    print!("{}", output::render(&report, format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(report.all_valid())
}
