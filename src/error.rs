//! Error types for rpc-probe

use std::fmt;
use thiserror::Error;

/// Main error type for the library
///
/// Failures of individual checks are not reported through this type; they are
/// recorded as [`ProbeError`] values inside the report. `Error` covers setup
/// problems such as an unreadable config file or a panicked probe task.
#[derive(Error, Debug)]
pub enum Error {
    /// Probe errors surfaced outside of a report
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Failed to build the HTTP client
    #[error("Failed to initialize HTTP client: {0}")]
    HttpClientInit(String),

    /// A spawned probe task did not complete
    #[error("Probe task failed: {0}")]
    Task(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Why a single check failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The target is not an absolute URL. No request was made.
    #[error("Invalid URL: {0}")]
    MalformedUrl(String),

    /// The endpoint answered with a JSON-RPC `error` object
    #[error("RPC error: {message}")]
    Rpc { message: String },

    /// The request never produced a usable JSON-RPC response
    #[error("{kind}: {message}")]
    Transport { kind: TransportKind, message: String },
}

impl ProbeError {
    /// Build a transport error
    pub fn transport(kind: TransportKind, message: impl Into<String>) -> Self {
        ProbeError::Transport {
            kind,
            message: message.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ProbeError::MalformedUrl(_) => "malformed_url",
            ProbeError::Rpc { .. } => "rpc",
            ProbeError::Transport { kind, .. } => match kind {
                TransportKind::Timeout => "timeout",
                TransportKind::Connect => "connect",
                TransportKind::Body => "body",
                TransportKind::Request => "request",
            },
        }
    }

    /// Whether the failure was caused by the request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ProbeError::Transport {
                kind: TransportKind::Timeout,
                ..
            }
        )
    }
}

/// Classification of transport failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// No response within the configured timeout
    Timeout,
    /// Could not connect to the host
    Connect,
    /// Response body unreadable, not JSON, or not a JSON object
    Body,
    /// Anything else reqwest reports (bad scheme, redirect loop, ...)
    Request,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportKind::Timeout => "Request timed out",
            TransportKind::Connect => "Connection failed",
            TransportKind::Body => "Invalid response body",
            TransportKind::Request => "Request failed",
        };
        f.write_str(s)
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportKind::Timeout
        } else if e.is_connect() {
            TransportKind::Connect
        } else if e.is_body() || e.is_decode() {
            TransportKind::Body
        } else {
            TransportKind::Request
        };
        ProbeError::transport(kind, e.to_string())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    InvalidFile(String),

    #[error("Invalid chain entry: {0}")]
    InvalidChain(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Output-related errors
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_passes_message_through() {
        let err = ProbeError::Rpc {
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "RPC error: boom");
    }

    #[test]
    fn test_transport_display() {
        let err = ProbeError::transport(TransportKind::Timeout, "operation timed out");
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Request timed out: operation timed out");

        let err = ProbeError::transport(TransportKind::Body, "expected value");
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ProbeError::MalformedUrl(String::new()).code(), "malformed_url");
        assert_eq!(
            ProbeError::Rpc {
                message: String::new()
            }
            .code(),
            "rpc"
        );
        assert_eq!(
            ProbeError::transport(TransportKind::Connect, "refused").code(),
            "connect"
        );
    }

    #[test]
    fn test_probe_error_converts() {
        let err: Error = ProbeError::MalformedUrl("nope".into()).into();
        assert!(matches!(err, Error::Probe(ProbeError::MalformedUrl(_))));
    }
}
