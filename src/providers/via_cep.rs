//! ViaCEP adapter: `GET {base}/ws/{cep}/json/`.
//!
//! ViaCEP answers unknown postal codes with 200 and an `erro` flag, sent as
//! either `true` or `"true"` depending on the API revision.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::lookup::{Address, LookupAdapter, LookupError, LookupRequest, Source};
use crate::providers::http::{endpoint, get_json};

pub const DEFAULT_BASE_URL: &str = "http://viacep.com.br";

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    logradouro: String,
    localidade: Option<String>,
    uf: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    erro: bool,
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

impl TryFrom<ViaCepResponse> for Address {
    type Error = LookupError;

    fn try_from(body: ViaCepResponse) -> Result<Self, Self::Error> {
        if body.erro {
            return Err(LookupError::NotFound);
        }
        match (body.localidade, body.uf) {
            (Some(city), Some(region)) => Ok(Address {
                street: body.logradouro,
                city,
                region,
            }),
            _ => Err(LookupError::Decode(
                "missing field `localidade` or `uf`".to_string(),
            )),
        }
    }
}

pub struct ViaCep {
    client: reqwest::Client,
    base_url: Url,
}

impl ViaCep {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn url_for(&self, request: &LookupRequest) -> Result<Url, LookupError> {
        endpoint(&self.base_url, &["ws", request.identifier(), "json", ""])
    }
}

#[async_trait]
impl LookupAdapter for ViaCep {
    fn source(&self) -> Source {
        Source::ViaCep
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<Address, LookupError> {
        let url = self.url_for(request)?;
        tracing::debug!(url = %url, "ViaCEP request");
        let body: ViaCepResponse = get_json(&self.client, url).await?;
        Address::try_from(body)
    }
}
