use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Rendezvous.
///
/// Each subsystem owns one variant. Binary-level glue still uses
/// `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum RendezvousError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("wizard: {0}")]
    Wizard(#[from] WizardError),

    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    #[error("submit: {0}")]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Wizard errors ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{step} needs {requirement}")]
    GateClosed {
        step: &'static str,
        requirement: &'static str,
    },

    #[error("already on the final step")]
    AtTerminal,
}

// ─── Storage errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} is not a valid store: {message}")]
    Corrupt { path: String, message: String },

    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ─── Gateway errors ─────────────────────────────────────────────────────────

/// Failures of `POST /api/send-response`. The display text is exactly what
/// the client sees in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Missing email configuration")]
    MissingConfig,

    #[error("{0}")]
    MalformedPayload(String),

    #[error("{0}")]
    Transport(String),
}

impl GatewayError {
    pub const UNKNOWN_MESSAGE: &'static str = "An unknown error occurred";

    pub fn transport(err: &anyhow::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::Transport(Self::UNKNOWN_MESSAGE.to_string())
        } else {
            Self::Transport(message)
        }
    }
}

// ─── Submit errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("gateway rejected response ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Convenience alias for library-level results.
pub type Result<T> = std::result::Result<T, RendezvousError>;
