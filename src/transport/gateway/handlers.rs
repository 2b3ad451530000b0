use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;

use super::{AppState, SendResponseReply};
use crate::GatewayError;
use crate::transport::mail::compose_response_email;
use crate::wizard::AnswerRecord;

/// GET /health: liveness plus mail wiring status
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "mail_configured": state.mail.is_some(),
    }))
}

/// POST /api/send-response: email one answer record to the configured inbox
pub(super) async fn handle_send_response(State(state): State<AppState>, body: Bytes) -> Response {
    match relay_response(&state, &body).await {
        Ok(()) => (StatusCode::OK, Json(SendResponseReply::ok())).into_response(),
        Err(error) => error.into_response(),
    }
}

async fn relay_response(state: &AppState, body: &[u8]) -> Result<(), GatewayError> {
    let Some(route) = &state.mail else {
        tracing::error!("Missing email credentials");
        return Err(GatewayError::MissingConfig);
    };

    let raw: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting unparsable response payload");
        GatewayError::MalformedPayload(e.to_string())
    })?;
    let record: AnswerRecord = serde_json::from_value(raw.clone()).map_err(|e| {
        tracing::warn!(error = %e, "rejecting response payload with unexpected shape");
        GatewayError::MalformedPayload(e.to_string())
    })?;

    let email = compose_response_email(&record, &raw, &route.sender, &state.subject, Utc::now())
        .map_err(|e| GatewayError::MalformedPayload(e.to_string()))?;

    route.mailer.send(&email).await.map_err(|e| {
        tracing::error!(mailer = route.mailer.name(), error = %e, "Failed to send email");
        GatewayError::transport(&e)
    })?;

    tracing::info!(
        attachment = %email.attachment.filename,
        "response relayed by email"
    );
    Ok(())
}
