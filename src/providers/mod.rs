//! External postal code providers.
//!
//! # Data Flow
//! ```text
//! LookupRequest
//!     → endpoint() (provider path, identifier percent-encoded)
//!     → get_json() (GET, 200 check, decode native body)
//!     → provider-specific normalization → Address
//! ```
//!
//! # Design Decisions
//! - One shared HTTP pipeline; adapters only own URL layout and field mapping
//! - Both adapters share one `reqwest::Client` (connection pool)

pub mod brasil_api;
pub mod http;
pub mod via_cep;

use std::sync::Arc;

pub use brasil_api::BrasilApi;
pub use via_cep::ViaCep;

use crate::config::ProvidersConfig;
use crate::lookup::LookupAdapter;

/// Errors raised while wiring the providers from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ProviderSetupError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: url::ParseError },
}

fn parse_base(url: &str) -> Result<url::Url, ProviderSetupError> {
    url.parse().map_err(|reason| ProviderSetupError::BaseUrl {
        url: url.to_string(),
        reason,
    })
}

/// Build both adapters from configuration, BrasilAPI first.
pub fn from_config(
    config: &ProvidersConfig,
) -> Result<Vec<Arc<dyn LookupAdapter>>, ProviderSetupError> {
    let client = http::build_client(config)?;
    let brasil_api: Arc<dyn LookupAdapter> =
        Arc::new(BrasilApi::new(client.clone(), parse_base(&config.brasil_api.base_url)?));
    let via_cep: Arc<dyn LookupAdapter> =
        Arc::new(ViaCep::new(client, parse_base(&config.via_cep.base_url)?));
    Ok(vec![brasil_api, via_cep])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Source;

    #[test]
    fn test_from_config_builds_both_providers() {
        let adapters = from_config(&ProvidersConfig::default()).unwrap();
        let sources: Vec<Source> = adapters.iter().map(|a| a.source()).collect();
        assert_eq!(sources, vec![Source::BrasilApi, Source::ViaCep]);
    }

    #[test]
    fn test_from_config_rejects_bad_base_url() {
        let mut config = ProvidersConfig::default();
        config.via_cep.base_url = "viacep".into();
        assert!(matches!(from_config(&config), Err(ProviderSetupError::BaseUrl { .. })));
    }
}
