//! Postal code lookup request.

use std::str::FromStr;
use thiserror::Error;

/// Errors raised when building a request from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("postal code must not be empty")]
    Empty,
}

/// Postal code to resolve.
///
/// Only emptiness is checked; the providers are the authority on format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupRequest(String);

impl LookupRequest {
    pub fn new(identifier: impl AsRef<str>) -> Result<Self, RequestError> {
        let trimmed = identifier.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RequestError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl FromStr for LookupRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for LookupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_identifier() {
        let request: LookupRequest = " 07263725 ".parse().unwrap();
        assert_eq!(request.identifier(), "07263725");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(LookupRequest::new(""), Err(RequestError::Empty));
        assert_eq!(LookupRequest::new("   "), Err(RequestError::Empty));
    }

    #[test]
    fn test_no_format_check() {
        assert!(LookupRequest::new("01001-000").is_ok());
        assert!(LookupRequest::new("abc").is_ok());
    }
}
