use async_trait::async_trait;

use crate::envelope::TelemetryEnvelope;
use crate::error::TransportResult;
use crate::verdict::{AlertFeed, HealthSnapshot, ServiceVerdict};

/// Client-side seam to the remote ingestion service.
/// Infrastructure (ridecheck-client) implements this trait over HTTP.
#[async_trait]
pub trait IngestApi: Send + Sync {
    /// Fetch the service's health counters.
    async fn check_health(&self) -> TransportResult<HealthSnapshot>;

    /// Submit one telemetry envelope and return the service's verdict.
    async fn submit_telemetry(
        &self,
        envelope: TelemetryEnvelope,
    ) -> TransportResult<ServiceVerdict>;

    /// Fetch the emergency alert feed.
    async fn list_alerts(&self) -> TransportResult<AlertFeed>;
}
