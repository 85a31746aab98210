//! HTTP-level tests for the maintenance endpoints against the in-memory
//! backend.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use fleet_management_api::routes::{AppState, create_app};
use serde_json::{Value, json};

fn create_test_server() -> TestServer {
    let app = create_app(AppState::in_memory());
    TestServer::new(app).unwrap()
}

fn vessel_payload(id: &str) -> Value {
    json!({
        "vesselId": id,
        "name": "Ocean Explorer",
        "type": "Container Ship",
        "flag": "Panama",
        "yearBuilt": 2018,
        "grossTonnage": 85000.0,
        "length": 300.0,
        "beam": 40.0,
        "draft": 14.5,
        "status": "Maintenance",
        "currentLocation": { "latitude": 25.7617, "longitude": -80.1918 },
        "nextScheduledMaintenance": (Utc::now() + Duration::days(30)).to_rfc3339(),
    })
}

fn maintenance_payload(id: &str, vessel: &Value) -> Value {
    json!({
        "maintenanceId": id,
        "vessel": vessel["id"],
        "type": "Routine",
        "description": "Main engine overhaul",
        "scheduledDate": (Utc::now() + Duration::days(5)).to_rfc3339(),
        "status": "Scheduled",
    })
}

async fn create_vessel(server: &TestServer, id: &str) -> Value {
    let response = server.post("/api/vessels").json(&vessel_payload(id)).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_create_maintenance_returns_record_with_defaults() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;

    let response = server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["maintenanceId"], "M001");
    assert_eq!(body["type"], "Routine");
    assert_eq!(body["status"], "Scheduled");
    assert!(body["id"].as_str().is_some());
    // Defaults for the optional list and cost fields.
    assert_eq!(body["assignedTechnicians"], json!([]));
    assert_eq!(body["parts"], json!([]));
    assert_eq!(body["totalCost"], 0.0);
    assert!(body["completedDate"].is_null());
    // Vessel reference comes back resolved.
    assert_eq!(body["vessel"]["vesselId"], "V001");
}

#[tokio::test]
async fn test_create_with_parts_and_technicians() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;

    let mut payload = maintenance_payload("M001", &vessel);
    payload["assignedTechnicians"] = json!(["Carlos Mendez", "Li Wei"]);
    payload["parts"] = json!([
        { "name": "Fuel injector", "quantity": 6, "cost": 1200.0 },
        { "name": "Gasket set", "quantity": 1, "cost": 340.5 }
    ]);
    payload["totalCost"] = json!(7540.5);

    let response = server.post("/api/maintenance").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["assignedTechnicians"].as_array().unwrap().len(), 2);
    assert_eq!(body["parts"][0]["name"], "Fuel injector");
    assert_eq!(body["parts"][0]["quantity"], 6);
    assert_eq!(body["totalCost"], 7540.5);
}

#[tokio::test]
async fn test_create_with_invalid_type_is_rejected() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;

    let mut payload = maintenance_payload("M001", &vessel);
    payload["type"] = json!("Cosmetic");
    let response = server.post("/api/maintenance").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_maintenance_returns_404() {
    let server = create_test_server();

    let response = server.get("/api/maintenance/M404").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["message"], "Maintenance record not found");
}

#[tokio::test]
async fn test_duplicate_maintenance_id_is_rejected() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    let response = server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_maintenance_applies_partial_patch() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    let response = server
        .put("/api/maintenance/M001")
        .json(&json!({ "notes": "Parts on back order", "totalCost": 9800.0 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["notes"], "Parts on back order");
    assert_eq!(body["totalCost"], 9800.0);
    assert_eq!(body["description"], "Main engine overhaul");
}

#[tokio::test]
async fn test_delete_maintenance_then_delete_again_returns_404() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    let response = server.delete("/api/maintenance/M001").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.delete("/api/maintenance/M001").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_patch_stores_completion_date_when_completed() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    let completed = Utc::now().to_rfc3339();
    let response = server
        .patch("/api/maintenance/M001/status")
        .json(&json!({ "status": "Completed", "completedDate": completed }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "Completed");
    assert_eq!(body["completedDate"], completed);
}

#[tokio::test]
async fn test_status_patch_ignores_completion_date_for_other_statuses() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    let response = server
        .patch("/api/maintenance/M001/status")
        .json(&json!({
            "status": "Delayed",
            "completedDate": Utc::now().to_rfc3339()
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "Delayed");
    assert!(body["completedDate"].is_null());
}

#[tokio::test]
async fn test_status_patch_rejects_unknown_value() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    let response = server
        .patch("/api/maintenance/M001/status")
        .json(&json!({ "status": "Abandoned" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_maintenance_by_vessel_filters_exactly() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    let other = create_vessel(&server, "V002").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M002", &other))
        .await;

    let response = server
        .get(&format!(
            "/api/maintenance/vessel/{}",
            vessel["id"].as_str().unwrap()
        ))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["maintenanceId"], "M001");
}

#[tokio::test]
async fn test_upcoming_maintenance_window_and_status_filter() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;

    // In the window, Scheduled: included.
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    // Same date but already Completed: excluded.
    let mut done = maintenance_payload("M002", &vessel);
    done["status"] = json!("Completed");
    server.post("/api/maintenance").json(&done).await;

    // Past the 30-day window: excluded.
    let mut distant = maintenance_payload("M003", &vessel);
    distant["scheduledDate"] = json!((Utc::now() + Duration::days(35)).to_rfc3339());
    server.post("/api/maintenance").json(&distant).await;

    // In the window, Delayed: included.
    let mut delayed = maintenance_payload("M004", &vessel);
    delayed["status"] = json!("Delayed");
    delayed["scheduledDate"] = json!((Utc::now() + Duration::days(12)).to_rfc3339());
    server.post("/api/maintenance").json(&delayed).await;

    let response = server.get("/api/maintenance/upcoming/scheduled").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().any(|r| r["maintenanceId"] == "M001"));
    assert!(records.iter().any(|r| r["maintenanceId"] == "M004"));
}

#[tokio::test]
async fn test_dangling_vessel_reference_resolves_to_null() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server
        .post("/api/maintenance")
        .json(&maintenance_payload("M001", &vessel))
        .await;

    server.delete("/api/vessels/V001").await;

    let response = server.get("/api/maintenance/M001").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["vessel"].is_null());
    assert_eq!(body["maintenanceId"], "M001");
}
