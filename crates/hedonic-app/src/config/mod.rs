//! Configuration loading for the hedonic front end.
//! Reads hedonic.toml from the path in HEDONIC_CONFIG or the current
//! directory; a missing file means pure defaults. HEDONIC_API_BASE overrides
//! the configured base URL so deployments can retarget without a code change.

use serde::{Deserialize, Serialize};
use std::path::Path;

use hedonic_client::ClientConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Opt-in acceptance of invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,
}

fn default_base_url()     -> String { "http://localhost:8080".to_string() }
fn default_timeout_secs() -> u64    { 10 }
fn default_max_retries()  -> u32    { 3 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            insecure: false,
        }
    }
}

impl ApiConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            max_retries: self.max_retries,
            insecure: self.insecure,
        }
    }
}

mod tests;

impl Config {
    /// Load configuration, layering env overrides on top of the file.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("HEDONIC_CONFIG").unwrap_or_else(|_| "hedonic.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(base_url) = std::env::var("HEDONIC_API_BASE") {
            config.api.base_url = base_url;
        }

        Ok(config)
    }
}
