pub mod envelope;
pub mod error;
pub mod ingest;
pub mod profile;
pub mod verdict;

pub use envelope::{DeviceStatus, GpsFix, SensorReadings, TelemetryEnvelope, Vector3};
pub use error::{TransportError, TransportResult};
pub use ingest::IngestApi;
pub use profile::{Profile, TelemetryGenerator, REFERENCE_LAT, REFERENCE_LNG};
pub use verdict::{AlertFeed, AlertRecord, HealthSnapshot, ServiceVerdict};
