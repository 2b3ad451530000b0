//! Outbound mail for finished responses.
//!
//! The gateway only talks to the [`Mailer`] trait; [`SmtpMailer`] is the
//! production implementation and tests substitute their own.

mod render;
mod smtp;

pub use render::{attachment_filename, compose_response_email, render_body};
pub use smtp::SmtpMailer;

use crate::config::MailConfig;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

pub const EMAIL_USER_ENV: &str = "EMAIL_USER";
pub const EMAIL_APP_PASSWORD_ENV: &str = "EMAIL_APP_PASSWORD";

/// Sender account used both to authenticate and as the fixed recipient.
#[derive(Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl MailCredentials {
    /// Resolves credentials once at startup.
    ///
    /// Priority: environment variable > config file. Both halves must be
    /// present and non-blank, otherwise `None`.
    pub fn resolve(config: &MailConfig) -> Option<Self> {
        let username = non_blank_env(EMAIL_USER_ENV).or_else(|| non_blank(config.username.as_deref()));
        let password =
            non_blank_env(EMAIL_APP_PASSWORD_ENV).or_else(|| non_blank(config.password.as_deref()));
        Some(Self {
            username: username?,
            password: password?,
        })
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .and_then(|value| non_blank(Some(&value)))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachment: MailAttachment,
}

/// Delivery backend for [`OutboundEmail`]s. One call, one send attempt.
pub trait Mailer: Send + Sync {
    fn name(&self) -> &str;

    fn send<'a>(
        &'a self,
        email: &'a OutboundEmail,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;
}
