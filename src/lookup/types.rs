//! Shared lookup types and error definitions.

use serde::Serialize;
use thiserror::Error;

/// Lookup provider that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    #[serde(rename = "BrasilAPI")]
    BrasilApi,
    #[serde(rename = "ViaCEP")]
    ViaCep,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::BrasilApi => "BrasilAPI",
            Source::ViaCep => "ViaCEP",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized address, independent of the provider's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    /// State abbreviation (e.g. "SP").
    pub region: String,
}

/// Errors a single lookup attempt can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Provider URL could not be built for the identifier.
    #[error("request construction error: {0}")]
    RequestConstruction(String),

    /// Connection, write or read failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider answered with something other than 200 OK.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// Body was not valid JSON in the provider's shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Provider reported that the postal code does not exist.
    #[error("postal code not found")]
    NotFound,
}

impl LookupError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::RequestConstruction(_) => "request_construction",
            LookupError::Transport(_) => "transport",
            LookupError::UnexpectedStatus(_) => "unexpected_status",
            LookupError::Decode(_) => "decode",
            LookupError::NotFound => "not_found",
        }
    }
}

/// Result of one adapter's attempt, tagged with the adapter that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success { source: Source, address: Address },
    Failure { source: Source, cause: LookupError },
}

impl LookupOutcome {
    pub fn from_result(source: Source, result: Result<Address, LookupError>) -> Self {
        match result {
            Ok(address) => LookupOutcome::Success { source, address },
            Err(cause) => LookupOutcome::Failure { source, cause },
        }
    }

    pub fn source(&self) -> Source {
        match self {
            LookupOutcome::Success { source, .. } => *source,
            LookupOutcome::Failure { source, .. } => *source,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success { .. })
    }
}
