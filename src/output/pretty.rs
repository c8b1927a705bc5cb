//! Human readable rendering

use crate::probe::{ChainResolution, CheckStatus, ValidationReport};
use std::fmt::Write;
use std::time::Duration;

/// Numbered status block, one line per check, followed by chain and verdict
pub fn render_pretty(report: &ValidationReport) -> String {
    let mut out = String::new();

    if !report.target().is_empty() {
        let _ = writeln!(out, "Endpoint: {}\n", report.target());
    }

    line(&mut out, 1, "URL syntax", report.url(), |_| "OK".to_string());
    line(&mut out, 2, "Chain ID", report.chain_id(), |p| match p.chain_id {
        Some(id) => format!("{}{}", id, latency(p.latency)),
        None => format!("unparseable result {}{}", p.raw, latency(p.latency)),
    });
    line(&mut out, 3, "Block number", report.block_number(), |p| {
        match p.block_number {
            Some(n) => format!("Block {}{}", format_thousands(n), latency(p.latency)),
            None => format!("OK{}", latency(p.latency)),
        }
    });
    line(&mut out, 4, "Balance query", report.balance(), |p| {
        format!("OK{}", latency(p.latency))
    });

    out.push('\n');
    match report.chain() {
        ChainResolution::Known(identity) => {
            let _ = write!(
                out,
                "Chain: {} (ID {}, {})",
                identity.name,
                identity.id,
                if identity.mainnet { "mainnet" } else { "testnet" }
            );
            if let Some(url) = &identity.info_url {
                let _ = write!(out, " - {}", url);
            }
            out.push('\n');
        }
        ChainResolution::Unknown { chain_id: Some(id) } => {
            let _ = writeln!(out, "Chain: unknown (ID {})", id);
        }
        ChainResolution::Unknown { chain_id: None } => {
            out.push_str("Chain: unknown\n");
        }
        ChainResolution::NotProbed | ChainResolution::Failed(_) => {}
    }

    if report.all_valid() {
        out.push_str("Endpoint is a working JSON-RPC endpoint.\n");
    } else if report.is_complete() {
        out.push_str("Endpoint failed validation.\n");
    } else if report.completed_checks() == 0 && !report.url().is_pending() {
        out.push_str("Endpoint not validated yet.\n");
    } else {
        out.push_str("Validation in progress...\n");
    }

    out
}

fn line<T>(
    out: &mut String,
    index: usize,
    label: &str,
    status: &CheckStatus<T>,
    success: impl Fn(&T) -> String,
) {
    let state = match status {
        CheckStatus::NotStarted => "- not started".to_string(),
        CheckStatus::Pending => "… pending".to_string(),
        CheckStatus::Succeeded(v) => format!("✓ {}", success(v)),
        CheckStatus::Failed(e) => format!("✗ FAILED: {}", e),
    };
    let _ = writeln!(out, "[{}/4] {:.<24} {}", index, label, state);
}

fn latency(d: Duration) -> String {
    format!(" ({}ms)", d.as_millis())
}

/// Format a number with thousands separators
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
