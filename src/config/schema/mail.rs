use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// Implicit-TLS port (default: 465)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// Sender account. `EMAIL_USER` takes precedence.
    #[serde(default)]
    pub username: Option<String>,
    /// Application password. `EMAIL_APP_PASSWORD` takes precedence.
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".into()
}

fn default_smtp_port() -> u16 {
    465
}

fn default_subject() -> String {
    "💕 New Date Response!".into()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: None,
            password: None,
            subject: default_subject(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
