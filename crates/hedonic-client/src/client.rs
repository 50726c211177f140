//! Prediction service client.
//!
//! One logical POST per call: `{base_url}/predict` with the JSON-encoded
//! feature set. Transport-level transient failures (connect, timeout) are
//! retried up to `max_retries` times; HTTP statuses are never retried.

use std::time::Duration;

use reqwest::{ClientBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use hedonic_common::error::{PredictionError, Result};
use hedonic_common::features::FeatureSet;

/// Price in thousands of USD, as returned by the model service.
pub type PredictedPrice = f64;

/// Remediation hints shown with a connectivity failure.
pub const CONNECTIVITY_CHECKLIST: [&str; 3] = [
    "1. Is the API server running?",
    "2. Is the API port exposed (e.g. in Docker)?",
    "3. Is the base URL correct?",
];

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Total round-trip cap, the only bound on blocking duration.
    pub timeout_secs: u64,
    /// Extra attempts on connect/timeout failures.
    pub max_retries: u32,
    /// Accept invalid/self-signed TLS certificates. Off unless explicitly
    /// enabled; the service deployments this targets often sit behind bare
    /// IPs with no proper certificate.
    pub insecure: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
            max_retries: 3,
            insecure: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    prediction: f64,
}

pub struct PredictionClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl PredictionClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // Fail on a malformed base URL here rather than on first use.
        Url::parse(&config.base_url).map_err(|e| {
            PredictionError::Config(format!("invalid base URL '{}': {e}", config.base_url))
        })?;

        if config.insecure {
            warn!("TLS certificate verification disabled (insecure mode)");
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(1)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(|e| PredictionError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// Submit one prediction request and return the predicted price.
    pub async fn predict(&self, features: &FeatureSet) -> Result<PredictedPrice> {
        features.validate()?;

        let url = format!("{}/predict", self.base_url);
        let resp = self.post_with_retry(&url, features).await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(PredictionError::Api {
                status: status.as_u16(),
            });
        }
        info!("API connection successful");

        let body: PredictionResponse = resp
            .json()
            .await
            .map_err(|e| PredictionError::Parse(format!("missing or malformed 'prediction': {e}")))?;
        debug!(prediction = body.prediction, "prediction received");
        Ok(body.prediction)
    }

    /// Reachability probe against the service's `GET /health` endpoint.
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;
        match resp.status() {
            StatusCode::OK => Ok(()),
            status => Err(PredictionError::Api {
                status: status.as_u16(),
            }),
        }
    }

    async fn post_with_retry(&self, url: &str, features: &FeatureSet) -> Result<reqwest::Response> {
        let mut attempt = 0u32;
        loop {
            match self.client.post(url).json(features).send().await {
                Ok(resp) => return Ok(resp),
                Err(e) if is_transient(&e) && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(attempt, error = %e, "transient transport failure, retrying");
                    tokio::time::sleep(RETRY_BACKOFF).await;
                }
                Err(e) => return Err(classify_transport_error(e)),
            }
        }
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

fn classify_transport_error(err: reqwest::Error) -> PredictionError {
    if err.is_decode() {
        PredictionError::Parse(err.to_string())
    } else {
        // Refused, DNS, unreachable, and timeouts all land here.
        PredictionError::Connectivity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_base_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            PredictionClient::new(&config),
            Err(PredictionError::Config(_))
        ));
    }

    #[test]
    fn test_trailing_slash_is_normalised() {
        let config = ClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..ClientConfig::default()
        };
        let client = PredictionClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_default_config_matches_adapter_policy() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.max_retries, 3);
        assert!(!config.insecure);
    }
}
