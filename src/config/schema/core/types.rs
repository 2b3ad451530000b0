use super::super::{GatewayConfig, MailConfig, WizardConfig};
use crate::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding config.toml and local storage - computed, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub mail: MailConfig,

    #[serde(default)]
    pub wizard: WizardConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home = UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        let data_dir = home.join(".rendezvous");

        Self {
            config_path: data_dir.join("config.toml"),
            data_dir,
            gateway: GatewayConfig::default(),
            mail: MailConfig::default(),
            wizard: WizardConfig::default(),
        }
    }
}

impl Config {
    /// Where the wizard's local storage lives.
    pub fn storage_path(&self) -> PathBuf {
        self.wizard
            .storage_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join("local_storage.json"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.wizard.gateway_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(invalid(format!(
                "wizard.gateway_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.wizard.submit_timeout_secs == 0 {
            return Err(invalid("wizard.submit_timeout_secs must be greater than zero"));
        }
        if self.mail.smtp_host.trim().is_empty() {
            return Err(invalid("mail.smtp_host cannot be empty"));
        }
        if self.mail.timeout_secs == 0 {
            return Err(invalid("mail.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation(message.into())
}
