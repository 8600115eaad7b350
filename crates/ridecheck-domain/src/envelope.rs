use serde::{Deserialize, Serialize};

/// One synthesized telemetry payload for a single device at a single
/// timestamp, in the exact JSON shape the ingestion service accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryEnvelope {
    pub device_id: String,
    /// Milliseconds since the Unix epoch, taken at generation time.
    pub timestamp: i64,
    pub sensors: SensorReadings,
    pub status: DeviceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub accelerometer: Vector3,
    pub gyroscope: Vector3,
    pub gps: GpsFix,
}

/// Raw sensor axes in device milli-units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    pub lat: f64,
    pub lng: f64,
    /// Ground speed in km/h. Omitted on the wire when the device reports none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub battery: u8,
    pub temperature: f64,
    pub rssi: i32,
}
