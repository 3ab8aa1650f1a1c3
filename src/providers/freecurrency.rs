use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::core::rate::{RateError, RateProvider};

// FreeCurrencyProvider implementation for RateProvider, backed by the
// freecurrencyapi.com "latest" endpoint.
pub struct FreeCurrencyProvider {
    base_url: String,
    api_key: String,
}

impl FreeCurrencyProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        FreeCurrencyProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn request_url(&self, base: &str, target: &str) -> Result<Url, RateError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("apikey", self.api_key.as_str()),
                ("currencies", target),
                ("base_currency", base),
            ],
        )
        .map_err(|e| RateError::InvalidUrl(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct RateResponse {
    data: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for FreeCurrencyProvider {
    async fn fetch_rate(&self, base: &str, target: &str) -> Result<f64, RateError> {
        let url = self.request_url(base, target)?;
        debug!("Requesting {base}->{target} rate from provider");

        let client = reqwest::Client::builder().user_agent("fxc/1.0").build()?;
        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Http {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let parsed: RateResponse = serde_json::from_str(&text)?;

        let rate = parsed
            .data
            .get(target)
            .copied()
            .ok_or_else(|| RateError::MissingRate(target.to_string()))?;
        if rate <= 0.0 {
            return Err(RateError::InvalidRate(rate));
        }

        debug!(rate, "Received exchange rate for {base}->{target}");
        Ok(rate)
    }
}
