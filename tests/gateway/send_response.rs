use crate::recording_gateway::{GatewayTestServer, RecordingMailer, SENDER, SUBJECT};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

fn payload() -> Value {
    json!({
        "isAvailable": true,
        "date": "2024-06-01",
        "time": "18:00",
        "food": ["Lasagna", "Chicken Pie"],
        "movie": "Titanic",
        "excitement": 75
    })
}

#[tokio::test]
async fn send_response_relays_exactly_one_email() {
    let mailer = Arc::new(RecordingMailer::default());
    let server = GatewayTestServer::start(Some(mailer.clone())).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/send-response"))
        .json(&payload())
        .send()
        .await
        .expect("send-response request should complete");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("reply should be json");
    assert_eq!(body, json!({ "success": true }));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.from, SENDER);
    assert_eq!(email.to, SENDER);
    assert_eq!(email.subject, SUBJECT);
    assert!(email.html.contains("Date: 6/1/2024"));
    assert!(email.html.contains("Time: 18:00"));
    assert!(email.html.contains("Food: Lasagna, Chicken Pie"));
    assert!(email.html.contains("Excitement: 75/100"));
    assert_eq!(email.attachment.content_type, "application/json");
    assert!(email.attachment.filename.starts_with("date-response-"));
    assert!(email.attachment.filename.ends_with(".json"));

    let attached: Value =
        serde_json::from_str(&email.attachment.body).expect("attachment should be json");
    assert_eq!(attached, payload());
}

#[tokio::test]
async fn send_response_without_credentials_is_500() {
    let server = GatewayTestServer::start(None).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/send-response"))
        .json(&payload())
        .send()
        .await
        .expect("send-response request should complete");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("reply should be json");
    assert_eq!(
        body,
        json!({ "success": false, "error": "Missing email configuration" })
    );
}

#[tokio::test]
async fn send_response_surfaces_transport_error() {
    let mailer = Arc::new(RecordingMailer {
        fail_with: Some("535 5.7.8 Username and Password not accepted".to_string()),
        ..RecordingMailer::default()
    });
    let server = GatewayTestServer::start(Some(mailer.clone())).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/send-response"))
        .json(&payload())
        .send()
        .await
        .expect("send-response request should complete");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("reply should be json");
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "535 5.7.8 Username and Password not accepted"
    );
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn oversized_body_gets_json_failure() {
    let mailer = Arc::new(RecordingMailer::default());
    let server = GatewayTestServer::start(Some(mailer.clone())).await;

    let huge = "x".repeat(70_000);
    let response = reqwest::Client::new()
        .post(server.url("/api/send-response"))
        .header("content-type", "application/json")
        .body(format!("{{\"movie\":\"{huge}\"}}"))
        .send()
        .await
        .expect("oversized request should complete");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.expect("reply should be json");
    assert_eq!(
        body,
        json!({ "success": false, "error": "request body exceeds 65536 bytes" })
    );
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn health_reports_mail_configuration() {
    let server = GatewayTestServer::start(Some(Arc::new(RecordingMailer::default()))).await;

    let body: Value = reqwest::get(server.url("/health"))
        .await
        .expect("health request should complete")
        .json()
        .await
        .expect("health should be json");
    assert_eq!(body, json!({ "status": "ok", "mail_configured": true }));
}
