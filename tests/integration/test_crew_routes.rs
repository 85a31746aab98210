//! HTTP-level tests for the crew endpoints against the in-memory backend.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use fleet_management_api::routes::{AppState, create_app};
use serde_json::{Value, json};
use uuid::Uuid;

fn create_test_server() -> TestServer {
    let app = create_app(AppState::in_memory());
    TestServer::new(app).unwrap()
}

fn crew_payload(id: &str) -> Value {
    json!({
        "crewId": id,
        "firstName": "James",
        "lastName": "Wilson",
        "position": "Captain",
        "nationality": "British",
        "dateOfBirth": "1975-03-15T00:00:00Z",
        "licenseNumber": "CPT-2020-1234",
        "licenseExpiry": (Utc::now() + Duration::days(365)).to_rfc3339(),
        "contactNumber": "+44-7700-900123",
        "email": "james.wilson@example.com",
        "status": "Active",
        "joinDate": "2020-06-01T00:00:00Z",
        "contractEndDate": (Utc::now() + Duration::days(400)).to_rfc3339(),
    })
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
        "status": "Active",
        "currentLocation": { "latitude": 25.7617, "longitude": -80.1918 },
        "nextScheduledMaintenance": (Utc::now() + Duration::days(30)).to_rfc3339(),
    })
}

async fn create_vessel(server: &TestServer, id: &str) -> Value {
    let response = server.post("/api/vessels").json(&vessel_payload(id)).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn test_create_crew_member_returns_record_with_server_fields() {
    let server = create_test_server();

    let response = server.post("/api/crew").json(&crew_payload("C001")).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["crewId"], "C001");
    assert_eq!(body["firstName"], "James");
    assert_eq!(body["lastName"], "Wilson");
    assert_eq!(body["position"], "Captain");
    assert_eq!(body["status"], "Active");
    assert!(body["id"].as_str().is_some());
    assert!(body["createdAt"].as_str().is_some());
    // Optional fields default sensibly.
    assert!(body["currentVessel"].is_null());
    assert_eq!(body["certifications"], json!([]));
}

#[tokio::test]
async fn test_create_crew_member_resolves_vessel_assignment() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;

    let mut payload = crew_payload("C001");
    payload["currentVessel"] = vessel["id"].clone();
    let response = server.post("/api/crew").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    // The raw reference comes back as a summary projection.
    assert_eq!(body["currentVessel"]["vesselId"], "V001");
    assert_eq!(body["currentVessel"]["name"], "Ocean Explorer");
    assert_eq!(body["currentVessel"]["id"], vessel["id"]);
}

#[tokio::test]
async fn test_get_unknown_crew_member_returns_404() {
    let server = create_test_server();

    let response = server.get("/api/crew/C404").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["message"], "Crew member not found");
}

#[tokio::test]
async fn test_duplicate_crew_id_is_rejected() {
    let server = create_test_server();
    server.post("/api/crew").json(&crew_payload("C001")).await;

    let response = server.post("/api/crew").json(&crew_payload("C001")).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_create_with_invalid_status_is_rejected() {
    let server = create_test_server();
    let mut payload = crew_payload("C001");
    payload["status"] = json!("Retired");

    let response = server.post("/api/crew").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_crew_member_applies_partial_patch() {
    let server = create_test_server();
    server.post("/api/crew").json(&crew_payload("C001")).await;

    let response = server
        .put("/api/crew/C001")
        .json(&json!({ "position": "Chief Officer", "status": "Training" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["position"], "Chief Officer");
    assert_eq!(body["status"], "Training");
    assert_eq!(body["firstName"], "James");
}

#[tokio::test]
async fn test_update_unknown_crew_member_returns_404() {
    let server = create_test_server();

    let response = server
        .put("/api/crew/C404")
        .json(&json!({ "position": "Bosun" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_crew_member_then_delete_again_returns_404() {
    let server = create_test_server();
    server.post("/api/crew").json(&crew_payload("C001")).await;

    let response = server.delete("/api/crew/C001").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.delete("/api/crew/C001").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assign_crew_member_to_vessel() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    server.post("/api/crew").json(&crew_payload("C001")).await;

    let response = server
        .patch("/api/crew/C001/assign")
        .json(&json!({ "vesselId": vessel["id"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["currentVessel"]["vesselId"], "V001");
}

#[tokio::test]
async fn test_assign_to_missing_vessel_is_tolerated() {
    let server = create_test_server();
    server.post("/api/crew").json(&crew_payload("C001")).await;

    // No existence check on the target; the dangling reference resolves
    // to null on every subsequent read.
    let response = server
        .patch("/api/crew/C001/assign")
        .json(&json!({ "vesselId": Uuid::new_v4() }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body["currentVessel"].is_null());
}

#[tokio::test]
async fn test_assign_with_null_clears_assignment() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    let mut payload = crew_payload("C001");
    payload["currentVessel"] = vessel["id"].clone();
    server.post("/api/crew").json(&payload).await;

    let response = server
        .patch("/api/crew/C001/assign")
        .json(&json!({ "vesselId": null }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert!(body["currentVessel"].is_null());
}

#[tokio::test]
async fn test_dangling_assignment_survives_vessel_delete() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    let mut payload = crew_payload("C001");
    payload["currentVessel"] = vessel["id"].clone();
    server.post("/api/crew").json(&payload).await;

    server.delete("/api/vessels/V001").await;

    let response = server.get("/api/crew/C001").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["currentVessel"].is_null());
}

#[tokio::test]
async fn test_crew_by_vessel_returns_current_roster() {
    let server = create_test_server();
    let vessel = create_vessel(&server, "V001").await;
    let other = create_vessel(&server, "V002").await;

    let mut aboard = crew_payload("C001");
    aboard["currentVessel"] = vessel["id"].clone();
    server.post("/api/crew").json(&aboard).await;
    let mut elsewhere = crew_payload("C002");
    elsewhere["currentVessel"] = other["id"].clone();
    server.post("/api/crew").json(&elsewhere).await;
    server.post("/api/crew").json(&crew_payload("C003")).await;

    let response = server
        .get(&format!("/api/crew/vessel/{}", vessel["id"].as_str().unwrap()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let roster = body.as_array().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0]["crewId"], "C001");
}

#[tokio::test]
async fn test_crew_by_vessel_rejects_malformed_id() {
    let server = create_test_server();

    let response = server.get("/api/crew/vessel/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn test_expiring_certifications_license_window() {
    let server = create_test_server();

    let mut expiring = crew_payload("C001");
    expiring["licenseExpiry"] = json!((Utc::now() + Duration::days(10)).to_rfc3339());
    server.post("/api/crew").json(&expiring).await;

    let mut distant = crew_payload("C002");
    distant["licenseExpiry"] = json!((Utc::now() + Duration::days(40)).to_rfc3339());
    server.post("/api/crew").json(&distant).await;

    let response = server.get("/api/crew/expiring-certifications").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["crewId"], "C001");
}

#[tokio::test]
async fn test_expiring_certifications_checks_certification_dates() {
    let server = create_test_server();

    // License is fine, but one certification expires within the window.
    let mut member = crew_payload("C001");
    member["licenseExpiry"] = json!((Utc::now() + Duration::days(200)).to_rfc3339());
    member["certifications"] = json!([
        {
            "name": "STCW Basic Safety",
            "issuedDate": "2021-01-10T00:00:00Z",
            "expiryDate": (Utc::now() + Duration::days(5)).to_rfc3339(),
        },
        {
            "name": "Advanced Firefighting",
            "issuedDate": "2023-02-01T00:00:00Z",
            "expiryDate": (Utc::now() + Duration::days(300)).to_rfc3339(),
        }
    ]);
    server.post("/api/crew").json(&member).await;

    let response = server.get("/api/crew/expiring-certifications").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["crewId"], "C001");
}
