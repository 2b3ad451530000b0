use rendezvous::transport::gateway::{AppState, MailRoute, build_app};
use rendezvous::transport::mail::{Mailer, OutboundEmail};
use reqwest::StatusCode;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SENDER: &str = "sweetheart@example.com";
pub const SUBJECT: &str = "💕 New Date Response!";

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
    pub fail_with: Option<String>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("mailer lock poisoned").clone()
    }
}

impl Mailer for RecordingMailer {
    fn name(&self) -> &str {
        "recording"
    }

    fn send<'a>(
        &'a self,
        email: &'a OutboundEmail,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.sent
                .lock()
                .expect("mailer lock poisoned")
                .push(email.clone());
            match &self.fail_with {
                Some(message) => Err(anyhow::anyhow!("{message}")),
                None => Ok(()),
            }
        })
    }
}

pub struct GatewayTestServer {
    port: u16,
    handle: tokio::task::JoinHandle<()>,
}

impl GatewayTestServer {
    pub async fn start(mailer: Option<Arc<RecordingMailer>>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral gateway listener should bind");
        let port = listener
            .local_addr()
            .expect("ephemeral gateway listener should expose local address")
            .port();

        let state = AppState {
            mail: mailer.map(|mailer| MailRoute {
                mailer: mailer as Arc<dyn Mailer>,
                sender: Arc::from(SENDER),
            }),
            subject: Arc::from(SUBJECT),
        };
        let app = build_app(state, &[]);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("gateway should serve");
        });

        wait_until_gateway_ready(port).await;
        Self { port, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

impl Drop for GatewayTestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn wait_until_gateway_ready(port: u16) {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("reqwest client should be built");

    for _ in 0..80 {
        let health = client
            .get(format!("http://127.0.0.1:{port}/health"))
            .send()
            .await;
        if matches!(health, Ok(resp) if resp.status() == StatusCode::OK) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("gateway did not become ready on port {port}");
}
