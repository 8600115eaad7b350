use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::envelope::{DeviceStatus, GpsFix, SensorReadings, TelemetryEnvelope, Vector3};

/// Reference GPS point the generator jitters around (New Delhi).
pub const REFERENCE_LAT: f64 = 28.6139;
pub const REFERENCE_LNG: f64 = 77.2090;

/// Statistical parameter set used to synthesize an envelope's sensor values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Physically plausible riding motion, gravity-dominated z axis.
    Normal,
    /// High-impact values far past any sane detection threshold.
    Accident,
}

/// Synthesizes telemetry envelopes for a given profile.
///
/// Pure data synthesis apart from its random source and the wall clock:
/// timestamps are taken at generation time, so sequential envelopes from the
/// same generator carry non-decreasing timestamps.
pub struct TelemetryGenerator {
    rng: StdRng,
}

impl TelemetryGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, profile: Profile, device_id: &str) -> TelemetryEnvelope {
        let (sensors, status) = match profile {
            Profile::Normal => (self.normal_sensors(), self.normal_status()),
            Profile::Accident => (self.accident_sensors(), accident_status()),
        };

        TelemetryEnvelope {
            device_id: device_id.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            sensors,
            status,
        }
    }

    fn normal_sensors(&mut self) -> SensorReadings {
        SensorReadings {
            accelerometer: Vector3 {
                x: self.rng.gen_range(800..=1200),
                y: self.rng.gen_range(100..=300),
                // Gravity keeps z near 9.8 m/s^2 in milli-units.
                z: self.rng.gen_range(9500..=10500),
            },
            gyroscope: Vector3 {
                x: self.rng.gen_range(-100..=100),
                y: self.rng.gen_range(-50..=50),
                z: self.rng.gen_range(-30..=30),
            },
            gps: GpsFix {
                lat: REFERENCE_LAT + self.rng.gen_range(-0.01..0.01),
                lng: REFERENCE_LNG + self.rng.gen_range(-0.01..0.01),
                speed: Some(self.rng.gen_range(20..=60)),
            },
        }
    }

    fn normal_status(&mut self) -> DeviceStatus {
        DeviceStatus {
            battery: self.rng.gen_range(70..=100),
            temperature: self.rng.gen_range(25.0..35.0),
            rssi: self.rng.gen_range(-60..=-30),
        }
    }

    fn accident_sensors(&mut self) -> SensorReadings {
        SensorReadings {
            accelerometer: Vector3 {
                x: self.rng.gen_range(20_000..=30_000),
                y: self.rng.gen_range(15_000..=25_000),
                z: self.rng.gen_range(22_000..=32_000),
            },
            gyroscope: Vector3 {
                x: self.rng.gen_range(15_000..=25_000),
                y: self.rng.gen_range(18_000..=28_000),
                z: self.rng.gen_range(16_000..=24_000),
            },
            // Sudden stop at the point of impact.
            gps: GpsFix {
                lat: REFERENCE_LAT,
                lng: REFERENCE_LNG,
                speed: Some(0),
            },
        }
    }
}

/// Representative post-impact readings: warm device, mid battery.
fn accident_status() -> DeviceStatus {
    DeviceStatus {
        battery: 75,
        temperature: 40.0,
        rssi: -50,
    }
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}
