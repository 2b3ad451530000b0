use anyhow::{Context, Result, anyhow};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::{MailCredentials, Mailer, OutboundEmail};
use crate::config::MailConfig;

/// SMTP relay over implicit TLS.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig, credentials: &MailCredentials) -> Result<Self> {
        let transport = SmtpTransport::relay(&config.smtp_host)
            .with_context(|| format!("configure SMTP relay {}", config.smtp_host))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                credentials.username.clone(),
                credentials.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();
        Ok(Self { transport })
    }
}

fn build_message(email: &OutboundEmail) -> Result<Message> {
    let from: Mailbox = email.from.parse().context("parse sender address")?;
    let to: Mailbox = email.to.parse().context("parse recipient address")?;
    let content_type = ContentType::parse(email.attachment.content_type)
        .map_err(|e| anyhow!("invalid attachment content type: {e:?}"))?;

    let attachment =
        Attachment::new(email.attachment.filename.clone()).body(email.attachment.body.clone(), content_type);

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::html(email.html.clone()))
                .singlepart(attachment),
        )
        .context("build email message")
}

impl Mailer for SmtpMailer {
    fn name(&self) -> &str {
        "smtp"
    }

    fn send<'a>(
        &'a self,
        email: &'a OutboundEmail,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let message = build_message(email)?;
            let transport = self.transport.clone();
            tokio::task::spawn_blocking(move || transport.send(&message))
                .await
                .context("join SMTP send task")?
                .map_err(|e| anyhow!("{e}"))?;
            Ok(())
        })
    }
}
