//! Exchange rate abstractions

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching an exchange rate.
///
/// Each failure reason is a distinct variant so callers can render
/// distinct messages instead of collapsing everything into one value.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("request to rate provider failed")]
    Request(#[from] reqwest::Error),
    #[error("rate provider returned HTTP {status}")]
    Http { status: u16 },
    #[error("malformed rate response")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("no rate available for currency: {0}")]
    MissingRate(String),
    #[error("rate provider returned a non-positive rate: {0}")]
    InvalidRate(f64),
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Returns the spot rate converting one unit of `base` into `target`.
    ///
    /// A successful result is always strictly positive.
    async fn fetch_rate(&self, base: &str, target: &str) -> Result<f64, RateError>;
}
