//! Report rendering

mod json;
mod pretty;

pub use json::to_json;
pub use pretty::{format_thousands, render_pretty};

use crate::error::OutputError;
use crate::probe::ValidationReport;
use std::str::FromStr;

/// How a report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable status block
    #[default]
    Pretty,
    /// Single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            other => Err(OutputError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Render a report in the given format
pub fn render(report: &ValidationReport, format: OutputFormat) -> crate::error::Result<String> {
    match format {
        OutputFormat::Pretty => Ok(render_pretty(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&to_json(report))?),
    }
}
