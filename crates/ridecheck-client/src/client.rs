use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use ridecheck_domain::{
    AlertFeed, AlertRecord, HealthSnapshot, IngestApi, ServiceVerdict, TelemetryEnvelope,
    TransportError, TransportResult,
};

use crate::config::IngestConfig;

/// HTTP implementation of [`IngestApi`] against the ingestion service's
/// JSON endpoints.
#[derive(Clone)]
pub struct HttpIngestClient {
    http: Client,
    base_url: String,
}

impl HttpIngestClient {
    pub fn new(config: IngestConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> TransportResult<T> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| TransportError::Unreachable {
                url: url.clone(),
                source: err.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::UnexpectedStatus {
                endpoint: url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| TransportError::MalformedBody {
                endpoint: url,
                source: err.into(),
            })
    }
}

/// The two alert-feed shapes seen in the wild: the canonical
/// `{count, alerts}` object and a bare array as a compatibility fallback.
#[derive(Deserialize)]
#[serde(untagged)]
enum AlertsBody {
    Wrapped {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        alerts: Vec<AlertRecord>,
    },
    Bare(Vec<AlertRecord>),
}

impl From<AlertsBody> for AlertFeed {
    fn from(body: AlertsBody) -> Self {
        match body {
            AlertsBody::Wrapped { count, alerts } => AlertFeed {
                count: count.unwrap_or(alerts.len() as u64),
                alerts,
            },
            AlertsBody::Bare(alerts) => AlertFeed {
                count: alerts.len() as u64,
                alerts,
            },
        }
    }
}

#[async_trait]
impl IngestApi for HttpIngestClient {
    async fn check_health(&self) -> TransportResult<HealthSnapshot> {
        self.get_json("/api/health").await
    }

    async fn submit_telemetry(
        &self,
        envelope: TelemetryEnvelope,
    ) -> TransportResult<ServiceVerdict> {
        let url = self.endpoint("/api/sensor-data");
        debug!(url = %url, device_id = %envelope.device_id, "POST");

        let response = self
            .http
            .post(&url)
            .json(&envelope)
            .send()
            .await
            .map_err(|err| TransportError::Unreachable {
                url: url.clone(),
                source: err.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::UnexpectedStatus {
                endpoint: url,
                status: status.as_u16(),
            });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|err| TransportError::MalformedBody {
                endpoint: url,
                source: err.into(),
            })?;

        // A missing flag is treated as "not detected" rather than a parse
        // failure; the sequencer reports the mismatch.
        let accident_detected = raw
            .get("accidentDetected")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(ServiceVerdict {
            accepted: true,
            accident_detected,
            raw,
        })
    }

    async fn list_alerts(&self) -> TransportResult<AlertFeed> {
        let body: AlertsBody = self.get_json("/api/emergency-alerts").await?;
        Ok(body.into())
    }
}
