use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ridecheck_client::{HttpIngestClient, IngestConfig};
use ridecheck_domain::{IngestApi, Profile, TelemetryGenerator, TransportError};

fn client_for(server: &MockServer) -> HttpIngestClient {
    HttpIngestClient::new(IngestConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .expect("client construction")
}

#[tokio::test]
async fn test_check_health_parses_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "connectedDevices": 2,
            "totalReadings": 150,
            "emergencyAlerts": 1
        })))
        .mount(&server)
        .await;

    let snapshot = client_for(&server).check_health().await.unwrap();

    assert_eq!(snapshot.status, "healthy");
    assert_eq!(snapshot.connected_devices, 2);
    assert_eq!(snapshot.total_readings, 150);
    assert_eq!(snapshot.emergency_alerts, 1);
}

#[tokio::test]
async fn test_check_health_maps_server_error_to_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).check_health().await.unwrap_err();

    assert!(matches!(
        err,
        TransportError::UnexpectedStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_unreachable_service_maps_to_transport_error() {
    // Discard port: nothing listens there.
    let client = HttpIngestClient::new(IngestConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout_secs: 1,
        request_timeout_secs: 1,
    })
    .unwrap();

    let err = client.check_health().await.unwrap_err();

    assert!(matches!(err, TransportError::Unreachable { .. }));
}

#[tokio::test]
async fn test_submit_normal_envelope_reports_no_accident() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sensor-data"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({ "deviceId": "T1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "accidentDetected": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = TelemetryGenerator::seeded(42).generate(Profile::Normal, "T1");
    let verdict = client_for(&server).submit_telemetry(envelope).await.unwrap();

    assert!(verdict.accepted);
    assert!(!verdict.accident_detected);
}

#[tokio::test]
async fn test_submit_accident_envelope_reports_detection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sensor-data"))
        .and(body_partial_json(json!({ "deviceId": "ACCIDENT_TEST_RUST" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accidentDetected": true,
            "alertId": 7
        })))
        .mount(&server)
        .await;

    let envelope =
        TelemetryGenerator::seeded(42).generate(Profile::Accident, "ACCIDENT_TEST_RUST");
    let verdict = client_for(&server).submit_telemetry(envelope).await.unwrap();

    assert!(verdict.accepted);
    assert!(verdict.accident_detected);
    assert_eq!(verdict.raw["alertId"], 7);
}

#[tokio::test]
async fn test_submit_with_missing_flag_defaults_to_not_detected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sensor-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let envelope = TelemetryGenerator::seeded(1).generate(Profile::Normal, "T1");
    let verdict = client_for(&server).submit_telemetry(envelope).await.unwrap();

    assert!(!verdict.accident_detected);
}

#[tokio::test]
async fn test_submit_with_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sensor-data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let envelope = TelemetryGenerator::seeded(1).generate(Profile::Normal, "T1");
    let err = client_for(&server).submit_telemetry(envelope).await.unwrap_err();

    assert!(matches!(err, TransportError::MalformedBody { .. }));
}

#[tokio::test]
async fn test_list_alerts_canonical_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/emergency-alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "alerts": [
                { "deviceId": "D1", "timestamp": 1756200000000u64 },
                { "deviceId": "D2", "timestamp": "2026-08-26T10:00:00Z" }
            ]
        })))
        .mount(&server)
        .await;

    let feed = client_for(&server).list_alerts().await.unwrap();

    assert_eq!(feed.count, 2);
    assert_eq!(feed.alerts.len(), 2);
    assert_eq!(feed.alerts[0].device_id, "D1");
}

#[tokio::test]
async fn test_list_alerts_bare_array_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/emergency-alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "deviceId": "D1", "timestamp": 1756200000000u64 }
        ])))
        .mount(&server)
        .await;

    let feed = client_for(&server).list_alerts().await.unwrap();

    assert_eq!(feed.count, 1);
    assert_eq!(feed.alerts[0].device_id, "D1");
}

#[tokio::test]
async fn test_list_alerts_empty_object_is_zero_alerts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/emergency-alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let feed = client_for(&server).list_alerts().await.unwrap();

    assert_eq!(feed.count, 0);
    assert!(feed.alerts.is_empty());
}
