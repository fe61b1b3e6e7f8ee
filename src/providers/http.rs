//! HTTP pipeline shared by the provider adapters.

use std::time::Duration;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ProvidersConfig;
use crate::lookup::LookupError;

/// Build the client shared by both providers.
///
/// No overall request timeout is set: the race scope bounds every call.
pub fn build_client(config: &ProvidersConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
        .build()
}

/// Append path segments to `base`, percent-encoding each one.
///
/// An empty trailing segment yields a trailing slash.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, LookupError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LookupError::RequestConstruction(format!("'{}' cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// GET `url` and decode a 200 response body as `T`.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: Url,
) -> Result<T, LookupError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(LookupError::UnexpectedStatus(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| LookupError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_segments() {
        let base: Url = "https://brasilapi.com.br".parse().unwrap();
        let url = endpoint(&base, &["api", "cep", "v1", "01001000"]).unwrap();
        assert_eq!(url.as_str(), "https://brasilapi.com.br/api/cep/v1/01001000");
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_trailing_slash() {
        let base: Url = "http://127.0.0.1:8080/mirror/".parse().unwrap();
        let url = endpoint(&base, &["ws", "01001000", "json", ""]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mirror/ws/01001000/json/");
    }

    #[test]
    fn test_endpoint_encodes_identifier() {
        let base: Url = "http://viacep.com.br".parse().unwrap();
        let url = endpoint(&base, &["ws", "01/001 000", "json", ""]).unwrap();
        assert_eq!(url.as_str(), "http://viacep.com.br/ws/01%2F001%20000/json/");
    }

    #[test]
    fn test_endpoint_rejects_cannot_be_base() {
        let base: Url = "mailto:someone@example.com".parse().unwrap();
        let err = endpoint(&base, &["x"]).unwrap_err();
        assert_eq!(err.kind(), "request_construction");
    }
}
