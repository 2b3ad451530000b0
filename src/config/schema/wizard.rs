use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Base URL of the submission gateway
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
    /// Local storage file. Defaults to `<config dir>/local_storage.json`.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    /// Upper bound on the submission request
    #[serde(default = "default_submit_timeout_secs")]
    pub submit_timeout_secs: u64,
}

fn default_gateway_url() -> String {
    "http://127.0.0.1:3000".into()
}

fn default_submit_timeout_secs() -> u64 {
    30
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            storage_path: None,
            submit_timeout_secs: default_submit_timeout_secs(),
        }
    }
}
