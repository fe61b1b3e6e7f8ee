//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("race.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("race.default_cep must not be empty")]
    EmptyDefaultCep,

    #[error("{field}: invalid base URL '{value}'")]
    InvalidBaseUrl { field: &'static str, value: String },

    #[error("providers.user_agent must not be empty")]
    EmptyUserAgent,
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.race.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.race.default_cep.trim().is_empty() {
        errors.push(ValidationError::EmptyDefaultCep);
    }

    let endpoints = [
        ("providers.brasil_api.base_url", &config.providers.brasil_api.base_url),
        ("providers.via_cep.base_url", &config.providers.via_cep.base_url),
    ];
    for (field, value) in endpoints {
        if !is_http_base(value) {
            errors.push(ValidationError::InvalidBaseUrl {
                field,
                value: value.clone(),
            });
        }
    }

    if config.providers.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_base(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base(),
        Err(_) => false,
    }
}
