use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    pub base_url: String,
    /// Hard caps so a stalled call cannot hang the suite.
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            connect_timeout_secs: 3,
            request_timeout_secs: 10,
        }
    }
}
