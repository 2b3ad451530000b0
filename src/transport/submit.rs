//! Client side of `POST /api/send-response`.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::gateway::{SEND_RESPONSE_PATH, SendResponseReply};
use crate::SubmitError;
use crate::wizard::AnswerRecord;

/// Hands a finished record to whatever relays it onward.
pub trait Submitter: Send + Sync {
    fn submit<'a>(
        &'a self,
        record: &'a AnswerRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), SubmitError>> + Send + 'a>>;
}

pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(gateway_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}{SEND_RESPONSE_PATH}", gateway_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit<'a>(
        &'a self,
        record: &'a AnswerRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), SubmitError>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&self.endpoint)
                .json(record)
                .send()
                .await
                .map_err(|e| SubmitError::Request(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            let message = response
                .json::<SendResponseReply>()
                .await
                .ok()
                .and_then(|reply| reply.error)
                .unwrap_or_else(|| status.to_string());
            Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            })
        })
    }
}
