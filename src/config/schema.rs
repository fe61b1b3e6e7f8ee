//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::providers::{brasil_api, via_cep};
use crate::race::DEFAULT_TIMEOUT;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Race settings (deadline, default postal code).
    pub race: RaceConfig,

    /// Provider endpoints and HTTP client settings.
    pub providers: ProvidersConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Race configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RaceConfig {
    /// Deadline for a whole race in milliseconds.
    pub timeout_ms: u64,

    /// Postal code used when none is given on the command line.
    pub default_cep: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            default_cep: "07263725".to_string(),
        }
    }
}

/// Provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub brasil_api: EndpointConfig,

    pub via_cep: EndpointConfig,

    /// User-Agent sent to both providers.
    pub user_agent: String,

    /// TCP connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            brasil_api: EndpointConfig::new(brasil_api::DEFAULT_BASE_URL),
            via_cep: EndpointConfig::new(via_cep::DEFAULT_BASE_URL),
            user_agent: concat!("cep-race/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_ms: 1000,
        }
    }
}

/// Single provider endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Scheme and host (optionally a path prefix), e.g. "https://brasilapi.com.br".
    pub base_url: String,
}

impl EndpointConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
