//! Face service connection settings.
//!
//! Built once at startup (see the server's `ServerConfig::load`) and handed
//! to [`AzureFaceClient`](crate::vendor::AzureFaceClient) by reference.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Deserialize, Serialize)]
pub struct VendorConfig {
    /// Base URL of the face API, e.g. `https://<resource>.cognitiveservices.azure.com/face/v1.0`.
    /// `/detect` and `/verify` are appended.
    #[serde(default)]
    pub endpoint: String,

    /// Full verify URL when it lives on a different host than `endpoint`.
    #[serde(default)]
    pub verify_url: Option<String>,

    /// Subscription key sent as `Ocp-Apim-Subscription-Key`.
    #[serde(default, skip_serializing)]
    pub subscription_key: String,

    /// Whole-request timeout for each outbound call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            verify_url: None,
            subscription_key: String::new(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// Keeps the subscription key out of logs.
impl fmt::Debug for VendorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VendorConfig")
            .field("endpoint", &self.endpoint)
            .field("verify_url", &self.verify_url)
            .field("subscription_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl VendorConfig {
    pub fn new(endpoint: impl Into<String>, subscription_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            subscription_key: subscription_key.into(),
            ..Self::default()
        }
    }

    /// Check that the settings can reach a vendor at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subscription_key.trim().is_empty() {
            return Err(ConfigError::MissingField("vendor.subscription_key"));
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("vendor.endpoint"));
        }
        self.detect_endpoint()?;
        self.verify_endpoint()?;
        Ok(())
    }

    pub fn detect_endpoint(&self) -> Result<Url, ConfigError> {
        parse_url(&format!("{}/detect", self.endpoint.trim_end_matches('/')))
    }

    pub fn verify_endpoint(&self) -> Result<Url, ConfigError> {
        match self.verify_url.as_deref() {
            Some(url) if !url.trim().is_empty() => parse_url(url),
            _ => parse_url(&format!("{}/verify", self.endpoint.trim_end_matches('/'))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
