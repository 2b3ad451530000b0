//! Axum-based submission gateway.
//!
//! - `POST /api/send-response` relays one finished answer record by email
//! - `GET /health` reports liveness and whether mail is configured
//! - Request body size limit (64KB) and request timeout (30s)

mod handlers;
mod server;

pub use server::{
    bind_gateway_listener, build_app, build_gateway_state, run_gateway, run_gateway_with_listener,
};

use crate::GatewayError;
use crate::transport::mail::Mailer;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(test)]
use handlers::{handle_health, handle_send_response};

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const SEND_RESPONSE_PATH: &str = "/api/send-response";

/// Mail delivery wiring, present only when credentials resolved at startup.
#[derive(Clone)]
pub struct MailRoute {
    pub mailer: Arc<dyn Mailer>,
    /// Sender address, also the fixed recipient.
    pub sender: Arc<str>,
}

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub mail: Option<MailRoute>,
    pub subject: Arc<str>,
}

/// Body returned by `POST /api/send-response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponseReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResponseReply {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SendResponseReply::failed(self.to_string())),
        )
            .into_response()
    }
}
