use serde::Deserialize;
use serde_json::Value;

/// Parsed response to a telemetry submission.
///
/// Produced per submission and consumed immediately by the caller; the
/// harness never persists verdicts.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceVerdict {
    pub accepted: bool,
    pub accident_detected: bool,
    /// Full response body, kept for operator display.
    pub raw: Value,
}

/// Read-only service counters from the health endpoint.
///
/// Missing fields default to zero/empty rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthSnapshot {
    pub status: String,
    pub connected_devices: u64,
    pub total_readings: u64,
    pub emergency_alerts: u64,
}

/// One entry from the emergency alert feed. The service does not document
/// the timestamp's type, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertRecord {
    pub device_id: String,
    pub timestamp: Value,
}

/// Emergency alert listing in its canonical shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertFeed {
    pub count: u64,
    pub alerts: Vec<AlertRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_snapshot_tolerates_missing_fields() {
        let snapshot: HealthSnapshot = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();

        assert_eq!(snapshot.status, "ok");
        assert_eq!(snapshot.connected_devices, 0);
        assert_eq!(snapshot.total_readings, 0);
        assert_eq!(snapshot.emergency_alerts, 0);
    }

    #[test]
    fn test_alert_record_keeps_raw_timestamp() {
        let numeric: AlertRecord =
            serde_json::from_str(r#"{"deviceId":"D1","timestamp":1756200000000}"#).unwrap();
        let textual: AlertRecord =
            serde_json::from_str(r#"{"deviceId":"D2","timestamp":"2026-08-26T10:00:00Z"}"#)
                .unwrap();

        assert_eq!(numeric.device_id, "D1");
        assert!(numeric.timestamp.is_number());
        assert!(textual.timestamp.is_string());
    }
}
