use facegate::VendorConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Sequential face service calls made by the longest flow.
const VENDOR_CALLS_PER_REQUEST: u32 = 3;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Inbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable permissive CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log filter directive, e.g. `info` or `facegate=debug,tower_http=info`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format
    #[serde(default = "default_true")]
    pub log_json: bool,

    /// Face service endpoint and credential
    #[serde(default)]
    pub vendor: VendorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            log_json: default_true(),
            vendor: VendorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `facegate.*` file and
    /// `FACEGATE_*` environment variables (nested keys use `__`, e.g.
    /// `FACEGATE_VENDOR__SUBSCRIPTION_KEY`).
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("facegate").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("FACEGATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.vendor.validate()?;

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Longest a `/findsimilar` chain can spend on the face service: three
    /// sequential calls plus one second of slack.
    pub fn vendor_budget(&self) -> Duration {
        self.vendor.timeout() * VENDOR_CALLS_PER_REQUEST + Duration::from_secs(1)
    }

    /// Inbound deadline actually applied to requests.
    ///
    /// Never shorter than [`vendor_budget`](Self::vendor_budget), so a slow
    /// vendor call fails with its own stage before the request deadline hits.
    pub fn request_timeout(&self) -> Duration {
        self.timeout().max(self.vendor_budget())
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size(), 1024 * 1024);
        assert!(cfg.enable_cors);
        assert!(cfg.log_json);
        assert!(cfg.vendor.subscription_key.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_nested_vendor_section() {
        let cfg: ServerConfig = serde_json::from_value(serde_json::json!({
            "port": 3001,
            "vendor": {
                "endpoint": "https://face.example.com/face/v1.0",
                "subscription_key": "k"
            }
        }))
        .unwrap();
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.vendor.timeout_secs, 30);
        cfg.vendor.validate().unwrap();
    }

    #[test]
    fn test_request_timeout_covers_vendor_chain() {
        let mut cfg = ServerConfig::default();
        assert_eq!(cfg.vendor_budget(), Duration::from_secs(91));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(91));

        cfg.timeout_secs = 120;
        assert_eq!(cfg.request_timeout(), Duration::from_secs(120));

        cfg.timeout_secs = 1;
        cfg.vendor.timeout_secs = 0;
        assert_eq!(cfg.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_reads_prefixed_env() {
        std::env::set_var("FACEGATE_PORT", "4100");
        std::env::set_var("FACEGATE_LOG_JSON", "false");
        std::env::set_var(
            "FACEGATE_VENDOR__ENDPOINT",
            "https://face.example.com/face/v1.0",
        );
        std::env::set_var("FACEGATE_VENDOR__SUBSCRIPTION_KEY", "env-key");
        std::env::set_var("FACEGATE_VENDOR__TIMEOUT_SECS", "5");

        let loaded = ServerConfig::load();

        for key in [
            "FACEGATE_PORT",
            "FACEGATE_LOG_JSON",
            "FACEGATE_VENDOR__ENDPOINT",
            "FACEGATE_VENDOR__SUBSCRIPTION_KEY",
            "FACEGATE_VENDOR__TIMEOUT_SECS",
        ] {
            std::env::remove_var(key);
        }

        let cfg = loaded.unwrap();
        assert_eq!(cfg.port, 4100);
        assert!(!cfg.log_json);
        assert_eq!(cfg.vendor.endpoint, "https://face.example.com/face/v1.0");
        assert_eq!(cfg.vendor.subscription_key, "env-key");
        assert_eq!(cfg.vendor.timeout_secs, 5);
        assert_eq!(cfg.vendor.connect_timeout_secs, 10);
    }
}
