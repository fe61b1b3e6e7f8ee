//! BrasilAPI adapter: `GET {base}/api/cep/v1/{cep}`.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::lookup::{Address, LookupAdapter, LookupError, LookupRequest, Source};
use crate::providers::http::{endpoint, get_json};

pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";

/// Response body (fields we use).
#[derive(Debug, Deserialize)]
struct BrasilApiResponse {
    #[serde(default)]
    street: String,
    city: String,
    state: String,
}

impl From<BrasilApiResponse> for Address {
    fn from(body: BrasilApiResponse) -> Self {
        Address {
            street: body.street,
            city: body.city,
            region: body.state,
        }
    }
}

pub struct BrasilApi {
    client: reqwest::Client,
    base_url: Url,
}

impl BrasilApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn url_for(&self, request: &LookupRequest) -> Result<Url, LookupError> {
        endpoint(&self.base_url, &["api", "cep", "v1", request.identifier()])
    }
}

#[async_trait]
impl LookupAdapter for BrasilApi {
    fn source(&self) -> Source {
        Source::BrasilApi
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<Address, LookupError> {
        let url = self.url_for(request)?;
        tracing::debug!(url = %url, "BrasilAPI request");
        let body: BrasilApiResponse = get_json(&self.client, url).await?;
        Ok(body.into())
    }
}
