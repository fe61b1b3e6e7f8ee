//! Race result and coordinator-level errors.

use std::time::Duration;
use serde::Serialize;
use thiserror::Error;

use crate::lookup::{Address, LookupError, LookupOutcome, Source};

/// Single outcome of a race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceResult {
    /// First adapter outcome to arrive, success or failure.
    Resolved(LookupOutcome),
    /// No adapter finished before the deadline.
    TimedOut { after: Duration },
}

/// Errors surfaced to the caller of a race.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    #[error("{provider}: {cause}")]
    Provider { provider: Source, cause: LookupError },

    #[error("timeout exceeded: no provider answered within {} ms", .0.as_millis())]
    Timeout(Duration),
}

/// Address resolved by the winning provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub source: Source,
    #[serde(flatten)]
    pub address: Address,
}

impl RaceResult {
    /// Short label used for metrics and logs.
    pub fn label(&self) -> &'static str {
        match self {
            RaceResult::Resolved(LookupOutcome::Success { .. }) => "success",
            RaceResult::Resolved(LookupOutcome::Failure { .. }) => "failure",
            RaceResult::TimedOut { .. } => "timeout",
        }
    }

    pub fn into_result(self) -> Result<Resolved, RaceError> {
        match self {
            RaceResult::Resolved(LookupOutcome::Success { source, address }) => {
                Ok(Resolved { source, address })
            }
            RaceResult::Resolved(LookupOutcome::Failure { source, cause }) => {
                Err(RaceError::Provider { provider: source, cause })
            }
            RaceResult::TimedOut { after } => Err(RaceError::Timeout(after)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = RaceResult::TimedOut { after: Duration::from_secs(1) }
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "timeout exceeded: no provider answered within 1000 ms");
    }

    #[test]
    fn test_provider_failure_display() {
        let result = RaceResult::Resolved(LookupOutcome::Failure {
            source: Source::BrasilApi,
            cause: LookupError::UnexpectedStatus(404),
        });
        assert_eq!(result.label(), "failure");
        assert_eq!(
            result.into_result().unwrap_err().to_string(),
            "BrasilAPI: unexpected status: 404"
        );
    }

    #[test]
    fn test_resolved_serializes_flat() {
        let resolved = Resolved {
            source: Source::ViaCep,
            address: Address {
                street: "Praça da Sé".into(),
                city: "São Paulo".into(),
                region: "SP".into(),
            },
        };
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["source"], "ViaCEP");
        assert_eq!(json["city"], "São Paulo");
    }
}
