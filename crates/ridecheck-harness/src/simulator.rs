use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use ridecheck_domain::{IngestApi, Profile, TelemetryGenerator};

pub const DEFAULT_SEND_INTERVAL: Duration = Duration::from_secs(2);

/// Counters for one bounded simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationSummary {
    pub attempts: u32,
    pub accepted: u32,
}

/// Strictly serial generate -> submit -> sleep loop, bounded by wall-clock
/// duration. Mimics a device firing a reading every couple of seconds.
pub struct ContinuousSimulator {
    client: Arc<dyn IngestApi>,
    device_id: String,
    interval: Duration,
}

impl ContinuousSimulator {
    pub fn new(client: Arc<dyn IngestApi>, device_id: impl Into<String>) -> Self {
        Self {
            client,
            device_id: device_id.into(),
            interval: DEFAULT_SEND_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Submits Normal-profile envelopes until `duration` of wall clock has
    /// elapsed, then returns the counters. The trailing sleep may overshoot
    /// the deadline, so the attempt count is approximate.
    pub async fn run(&self, duration: Duration) -> SimulationSummary {
        info!(
            duration_secs = duration.as_secs(),
            interval_secs = self.interval.as_secs(),
            device_id = %self.device_id,
            "starting continuous simulation"
        );

        let started = Instant::now();
        let mut generator = TelemetryGenerator::new();
        let mut summary = SimulationSummary::default();

        while started.elapsed() < duration {
            let envelope = generator.generate(Profile::Normal, &self.device_id);
            let speed = envelope.sensors.gps.speed.unwrap_or(0);
            summary.attempts += 1;

            match self.client.submit_telemetry(envelope).await {
                Ok(verdict) if verdict.accepted => {
                    summary.accepted += 1;
                    debug!(speed_kmh = speed, "normal envelope accepted");
                }
                Ok(_) => warn!("envelope submitted but not accepted"),
                Err(err) => warn!(error = %err, "envelope submission failed"),
            }

            sleep(self.interval).await;
        }

        info!(
            attempts = summary.attempts,
            accepted = summary.accepted,
            "simulation complete"
        );
        summary
    }
}
