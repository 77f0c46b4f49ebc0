//! Router tests
//!
//! Handlers run against a recording forwarder; the HTTP forwarder is exercised
//! end-to-end against a loopback webhook.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::create_router;
use crate::config::ServerConfig;
use crate::error::{ForwardError, ForwardResult};
use crate::forwarder::{Forwarder, HttpForwarder};
use crate::state::AppState;

/// Records every forward; answers with a fixed webhook status
#[derive(Clone, Default)]
struct RecordingForwarder {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    reject_with: Option<u16>,
}

impl RecordingForwarder {
    fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Forwarder for RecordingForwarder {
    async fn forward(&self, url: &str, payload: &Value) -> ForwardResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        match self.reject_with {
            Some(code) => Err(ForwardError::Rejected(code)),
            None => Ok(()),
        }
    }
}

fn test_config(vars: &[(&str, &str)]) -> ServerConfig {
    let mut map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    map.insert("STATIC_DIR".into(), "/nonexistent-static-dir".into());
    ServerConfig::from_lookup(|key| map.get(key).cloned()).unwrap()
}

fn all_hooks() -> ServerConfig {
    test_config(&[
        ("DESIGN_REQUEST_WEBHOOK_URL", "https://flow.test/design"),
        ("LSM_REQUEST_WEBHOOK_URL", "https://flow.test/lsm"),
        ("PRICE_CHANGE_WEBHOOK_URL", "https://flow.test/price"),
        ("STORE_HOURS_WEBHOOK_URL", "https://flow.test/hours"),
        ("PORTAL_STORE_NAME", "Irvine Spectrum"),
    ])
}

async fn post_json(app: Router, path: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn price_change_body() -> Value {
    json!({
        "id": "PC-120001",
        "storeName": ["Downtown LA", "Irvine"],
        "managerName": "Sam Lee",
        "managerEmail": "sam@store.com",
        "priceChangeRequest": "Online",
        "effectiveDate": "11/1/2026",
        "popNeeded": "No",
        "description": "Delivery menu pricing",
        "currentPrice": "5.99",
        "updatedPrice": "6.49",
        "submittedDate": "10/16/2026",
        "status": "Pending"
    })
}

fn store_hours_body() -> Value {
    let days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
    json!({
        "id": "SHC-555555",
        "storeName": "Irvine",
        "managerName": "Sam Lee",
        "managerEmail": "sam@store.com",
        "changeType": "new_hours",
        "hours": days
            .iter()
            .map(|d| json!({ "day": d, "startTime": "11:00", "endTime": "21:00" }))
            .collect::<Vec<_>>(),
        "submittedDate": "10/16/2026",
        "status": "Pending"
    })
}

#[tokio::test]
async fn test_price_change_is_shaped_and_forwarded() {
    let forwarder = RecordingForwarder::default();
    let app = create_router(AppState::new(all_hooks(), forwarder.clone()));

    let (status, body) = post_json(app, "/api/price-changes", price_change_body().to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    let calls = forwarder.calls();
    assert_eq!(calls.len(), 1);
    let (url, payload) = &calls[0];
    assert_eq!(url, "https://flow.test/price");
    assert_eq!(payload["storeName"], "Downtown LA, Irvine");
    assert_eq!(payload["popNeeded"], "No");
    assert!(payload.get("status").is_none());
    assert!(payload.get("submittedDate").is_none());
}

#[tokio::test]
async fn test_missing_webhook_url_is_500() {
    let forwarder = RecordingForwarder::default();
    let config = test_config(&[("PRICE_CHANGE_WEBHOOK_URL", "https://flow.test/price")]);
    let app = create_router(AppState::new(config, forwarder.clone()));

    let (status, body) =
        post_json(app, "/api/store-hours-changes", store_hours_body().to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Webhook URL not configured");
    assert!(forwarder.calls().is_empty());
}

#[tokio::test]
async fn test_webhook_rejection_passes_status_through() {
    let forwarder = RecordingForwarder::rejecting(503);
    let app = create_router(AppState::new(all_hooks(), forwarder));

    let (status, body) = post_json(app, "/api/price-changes", price_change_body().to_string()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Failed to forward submission");
}

/// Captures formatted log output for the current thread
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[tokio::test]
async fn test_rejected_forward_logs_kind_and_id() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = create_router(AppState::new(all_hooks(), RecordingForwarder::rejecting(502)));
    let (status, _) = post_json(app, "/api/price-changes", price_change_body().to_string()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let output = logs.contents();
    assert!(output.contains("Submission not forwarded"), "{}", output);
    assert!(output.contains("Price Change"), "{}", output);
    assert!(output.contains("PC-120001"), "{}", output);
}

#[tokio::test]
async fn test_malformed_body_is_500() {
    let forwarder = RecordingForwarder::default();
    let app = create_router(AppState::new(all_hooks(), forwarder.clone()));

    let (status, body) = post_json(app, "/api/design-requests", "{ not json".into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to submit request");
    assert!(forwarder.calls().is_empty());
}

#[tokio::test]
async fn test_design_request_optional_fields_default_to_empty() {
    let forwarder = RecordingForwarder::default();
    let app = create_router(AppState::new(all_hooks(), forwarder.clone()));
    let body = json!({
        "id": "REQ-000777",
        "storeNumber": "1234",
        "storeName": "Downtown LA",
        "contactName": "Dana Reyes",
        "email": "dana@store.com",
        "requestType": "Banner",
        "description": "Patio banner"
    });

    let (status, _) = post_json(app, "/api/design-requests", body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let (url, payload) = forwarder.calls().remove(0);
    assert_eq!(url, "https://flow.test/design");
    assert_eq!(payload["phone"], "");
    assert_eq!(payload["neededByDate"], "");
    assert_eq!(payload["fileName"], "");
}

#[tokio::test]
async fn test_lsm_request_forwards_lists() {
    let forwarder = RecordingForwarder::default();
    let app = create_router(AppState::new(all_hooks(), forwarder.clone()));
    let body = json!({
        "id": "LSM-424242",
        "requestDate": "10/16/2026",
        "storeLocation": "#1234 - Downtown LA",
        "contactName": "Dana Reyes",
        "contactEmail": "dana@store.com",
        "lsmTypes": ["Direct Mail", "Web Ad"],
        "desiredMessage": "Buy one get one"
    });

    let (status, _) = post_json(app, "/api/lsm-requests", body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, payload) = forwarder.calls().remove(0);
    assert_eq!(payload["lsmTypes"], json!(["Direct Mail", "Web Ad"]));
    assert_eq!(payload["color"], json!([]));
    assert_eq!(payload["couponOffers"], "");
}

#[tokio::test]
async fn test_null_optional_fields_forward_as_empty() {
    let forwarder = RecordingForwarder::default();
    let app = create_router(AppState::new(all_hooks(), forwarder.clone()));
    let design = json!({
        "id": "REQ-000778",
        "storeNumber": "1234",
        "storeName": "Downtown LA",
        "contactName": "Dana Reyes",
        "email": "dana@store.com",
        "phone": null,
        "requestType": "Flyer",
        "description": "Grand opening flyer",
        "neededByDate": null,
        "fileName": null
    });
    let lsm = json!({
        "id": "LSM-424243",
        "storeLocation": ["#1234 - Downtown LA"],
        "contactName": "Dana Reyes",
        "contactEmail": "dana@store.com",
        "contactPhone": null,
        "lsmTypes": ["Door Hanger"],
        "desiredMessage": "Now open late",
        "couponOffers": null,
        "color": null,
        "fileType": null,
        "desired1stRoundDate": null
    });

    let (status, _) = post_json(app.clone(), "/api/design-requests", design.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = post_json(app, "/api/lsm-requests", lsm.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let calls = forwarder.calls();
    assert_eq!(calls.len(), 2);
    let design_payload = &calls[0].1;
    assert_eq!(design_payload["phone"], "");
    assert_eq!(design_payload["neededByDate"], "");
    assert_eq!(design_payload["fileName"], "");
    let lsm_payload = &calls[1].1;
    assert_eq!(lsm_payload["contactPhone"], "");
    assert_eq!(lsm_payload["couponOffers"], "");
    assert_eq!(lsm_payload["color"], json!([]));
    assert_eq!(lsm_payload["fileType"], json!([]));
    assert_eq!(lsm_payload["desired1stRoundDate"], "");
}

#[tokio::test]
async fn test_health_and_portal_config() {
    let app = create_router(AppState::new(all_hooks(), RecordingForwarder::default()));
    let (status, body) = get_json(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get_json(app, "/api/portal-config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storeNumber"], "1234");
    assert_eq!(body["storeName"], "Irvine Spectrum");
    assert_eq!(body["marketingAssetsFormUrl"], Value::Null);
}

// ========================
// HttpForwarder against a loopback webhook
// ========================

async fn spawn_webhook(status: StatusCode) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let hook = Router::new().route(
        "/hook",
        post(move |Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(body);
                status
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, hook).await.unwrap();
    });
    (format!("http://{}/hook", addr), received)
}

#[tokio::test]
async fn test_store_hours_reaches_webhook_flattened() {
    let (url, received) = spawn_webhook(StatusCode::ACCEPTED).await;
    let config = test_config(&[("STORE_HOURS_WEBHOOK_URL", url.as_str())]);
    let app = create_router(AppState::new(config, HttpForwarder::new()));

    let (status, _) =
        post_json(app, "/api/store-hours-changes", store_hours_body().to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let received = received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["changeType"], "new_hours");
    assert_eq!(received[0]["Wed_Start"], "11:00");
    assert_eq!(received[0]["Sat_End"], "21:00");
    assert!(received[0].get("hours").is_none());
}

#[tokio::test]
async fn test_http_forwarder_reports_rejection() {
    let (url, received) = spawn_webhook(StatusCode::BAD_REQUEST).await;
    let result = HttpForwarder::new().forward(&url, &json!({ "id": "PC-1" })).await;
    assert!(matches!(result, Err(ForwardError::Rejected(400))));
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_webhook_is_500() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{}/hook", addr);
    let config = test_config(&[("PRICE_CHANGE_WEBHOOK_URL", url.as_str())]);
    let app = create_router(AppState::new(config, HttpForwarder::new()));

    let (status, body) = post_json(app, "/api/price-changes", price_change_body().to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to submit request");
}
