use super::handlers::{handle_health, handle_send_response};
use super::{AppState, MAX_BODY_SIZE, MailRoute, REQUEST_TIMEOUT_SECS, SEND_RESPONSE_PATH};

use crate::GatewayError;
use crate::config::Config;
use crate::transport::mail::{MailCredentials, SmtpMailer};
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the submission gateway on `host:port`.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    let listener = bind_gateway_listener(host, port, &config).await?;
    run_gateway_with_listener(host, listener, config).await
}

/// Binds the gateway socket. Host names such as `localhost` are resolved;
/// bracketed IPv6 literals are accepted.
pub async fn bind_gateway_listener(
    host: &str,
    port: u16,
    config: &Config,
) -> Result<tokio::net::TcpListener> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the gateway would accept submissions from the network.\n\
             Fix: use --host 127.0.0.1 (default), or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let bare_host = host.trim_start_matches('[').trim_end_matches(']');
    tokio::net::TcpListener::bind((bare_host, port))
        .await
        .with_context(|| format!("bind gateway socket on {host}:{port}"))
}

/// Resolves mail credentials once and wires the SMTP mailer.
///
/// Missing credentials do not stop the server; every submission then fails
/// with a configuration error instead.
pub fn build_gateway_state(config: &Config) -> Result<AppState> {
    let mail = match MailCredentials::resolve(&config.mail) {
        Some(credentials) => {
            let mailer = SmtpMailer::new(&config.mail, &credentials)?;
            Some(MailRoute {
                mailer: Arc::new(mailer),
                sender: Arc::from(credentials.username.as_str()),
            })
        }
        None => {
            tracing::warn!(
                "EMAIL_USER / EMAIL_APP_PASSWORD not set; submissions will be rejected"
            );
            None
        }
    };

    Ok(AppState {
        mail,
        subject: Arc::from(config.mail.subject.as_str()),
    })
}

/// Run the gateway from a pre-bound listener until Ctrl+C.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    let state = build_gateway_state(&config)?;
    print_gateway_banner(&display_addr, state.mail.is_some());

    let app = build_app(state, &config.gateway.cors_origins);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP gateway")?;

    tracing::info!("gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, shutting down");
}

fn print_gateway_banner(display_addr: &str, mail_configured: bool) {
    println!("Gateway listening on {display_addr}");
    println!("  POST {SEND_RESPONSE_PATH}");
    println!("  GET  /health");
    if mail_configured {
        println!("  Mail relay ready");
    } else {
        println!("  Mail relay NOT configured (set EMAIL_USER and EMAIL_APP_PASSWORD)");
    }
}

pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    let mut app = Router::new()
        .route("/health", get(handle_health))
        .route(SEND_RESPONSE_PATH, post(handle_send_response))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(middleware::map_response(reshape_layer_rejection));

    if !cors_origins.is_empty() {
        let origins: Vec<_> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );
    }

    app
}

/// Body-limit and timeout layers answer with bare status codes; clients
/// always get the `{success:false,error}` body instead.
pub(super) async fn reshape_layer_rejection(response: Response) -> Response {
    match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE => GatewayError::MalformedPayload(format!(
            "request body exceeds {MAX_BODY_SIZE} bytes"
        ))
        .into_response(),
        StatusCode::REQUEST_TIMEOUT => {
            GatewayError::Transport("request timed out".to_string()).into_response()
        }
        _ => response,
    }
}
