//! Per-check state

use crate::error::ProbeError;

/// State of one check within a report
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckStatus<T> {
    /// No validation has been requested yet
    #[default]
    NotStarted,
    /// Request in flight
    Pending,
    /// Check passed
    Succeeded(T),
    /// Check failed
    Failed(ProbeError),
}

impl<T> CheckStatus<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckStatus::Succeeded(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CheckStatus::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    /// Succeeded or failed
    pub fn is_terminal(&self) -> bool {
        self.is_success() || self.is_failure()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CheckStatus::Succeeded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        match self {
            CheckStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Short lowercase label, used by the JSON output
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::NotStarted => "not_started",
            CheckStatus::Pending => "pending",
            CheckStatus::Succeeded(_) => "succeeded",
            CheckStatus::Failed(_) => "failed",
        }
    }
}

impl<T> From<std::result::Result<T, ProbeError>> for CheckStatus<T> {
    fn from(result: std::result::Result<T, ProbeError>) -> Self {
        match result {
            Ok(v) => CheckStatus::Succeeded(v),
            Err(e) => CheckStatus::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states() {
        let status: CheckStatus<u64> = CheckStatus::default();
        assert!(!status.is_terminal());
        assert_eq!(status.label(), "not_started");

        let status: CheckStatus<u64> = CheckStatus::Pending;
        assert!(status.is_pending());
        assert!(!status.is_terminal());

        let status = CheckStatus::Succeeded(7u64);
        assert!(status.is_terminal());
        assert_eq!(status.value(), Some(&7));
        assert!(status.error().is_none());

        let status: CheckStatus<u64> = CheckStatus::Failed(ProbeError::MalformedUrl("x".into()));
        assert!(status.is_failure());
        assert!(status.value().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok: CheckStatus<u8> = Ok(1).into();
        assert!(ok.is_success());

        let err: CheckStatus<u8> = Err(ProbeError::Rpc {
            message: "boom".into(),
        })
        .into();
        assert_eq!(
            err.error(),
            Some(&ProbeError::Rpc {
                message: "boom".into()
            })
        );
    }
}
