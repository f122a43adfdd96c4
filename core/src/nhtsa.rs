//! NHTSA vPIC API client
//!
//! Issues `GET {endpoint}/DecodeVinValues/{VIN}?format=json` and hands back the
//! parsed body. No retries and no timeout: a request lives as long as the
//! server keeps it open.

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use vinscope_common::config::Config;
use vinscope_common::decoder::VinDecoder;
use vinscope_common::error::LookupError;
use vinscope_common::record::DecodeResponse;
use vinscope_common::vin::Vin;

const DECODE_PATH: &str = "DecodeVinValues";

pub struct NhtsaClient {
    http: Client,
    base: Url,
}

impl NhtsaClient {
    /// Creates a client rooted at `cfg.endpoint`.
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let base = Url::parse(&cfg.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", cfg.endpoint))?;

        if base.cannot_be_a_base() {
            return Err(anyhow!("Endpoint cannot carry a path: {}", cfg.endpoint));
        }

        let mut builder = Client::builder();
        if cfg.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { http, base })
    }

    /// The full request URL for `vin`. The VIN is a single, percent-encoded
    /// path segment.
    pub fn decode_url(&self, vin: &Vin) -> Url {
        let mut url: Url = self.base.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(DECODE_PATH).push(vin.as_str());
        }
        url.query_pairs_mut().clear().append_pair("format", "json");

        url
    }
}

#[async_trait]
impl VinDecoder for NhtsaClient {
    async fn decode(&self, vin: &Vin) -> Result<DecodeResponse, LookupError> {
        let url: Url = self.decode_url(vin);
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                debug!("Error fetching VIN data: {e}");
                LookupError::transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Error fetching VIN data: status {status}");
            return Err(LookupError::http_status(status.as_u16()));
        }

        let body: String = response.text().await.map_err(LookupError::transport)?;
        debug!("API response: {body}");

        serde_json::from_str(&body).map_err(|e| {
            debug!("Error parsing VIN data: {e}");
            LookupError::transport(e)
        })
    }
}
