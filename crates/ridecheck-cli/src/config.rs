use config::{Config, ConfigError, Environment};
use ridecheck_client::IngestConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HarnessConfig {
    /// Base URL of the ingestion service
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Soak phase duration in seconds for the full suite
    #[serde(default = "default_soak_secs")]
    pub soak_secs: u64,

    /// Connect timeout for remote calls in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Total per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_server_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_soak_secs() -> u64 {
    15
}

fn default_connect_timeout_secs() -> u64 {
    3
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("RIDECHECK"))
            .build()?
            .try_deserialize()
    }

    pub fn ingest(&self) -> IngestConfig {
        IngestConfig {
            base_url: self.server_url.clone(),
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env-var tests interfere with each other, run them serially
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let _lock = TEST_LOCK.lock().unwrap();
        std::env::remove_var("RIDECHECK_SERVER_URL");
        std::env::remove_var("RIDECHECK_SOAK_SECS");

        let config = HarnessConfig::from_env().unwrap();

        assert_eq!(config.server_url, "http://localhost:3001");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.soak_secs, 15);
        assert_eq!(config.connect_timeout_secs, 3);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_env_overrides() {
        let _lock = TEST_LOCK.lock().unwrap();
        std::env::set_var("RIDECHECK_SERVER_URL", "http://backend:4000");
        std::env::set_var("RIDECHECK_SOAK_SECS", "5");

        let config = HarnessConfig::from_env().unwrap();

        assert_eq!(config.server_url, "http://backend:4000");
        assert_eq!(config.soak_secs, 5);

        std::env::remove_var("RIDECHECK_SERVER_URL");
        std::env::remove_var("RIDECHECK_SOAK_SECS");
    }

    #[test]
    fn test_ingest_config_carries_timeouts() {
        let _lock = TEST_LOCK.lock().unwrap();
        std::env::remove_var("RIDECHECK_SERVER_URL");

        let ingest = HarnessConfig::from_env().unwrap().ingest();

        assert_eq!(ingest.base_url, "http://localhost:3001");
        assert_eq!(ingest.connect_timeout_secs, 3);
        assert_eq!(ingest.request_timeout_secs, 10);
    }
}
