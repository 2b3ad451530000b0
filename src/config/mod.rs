pub mod schema;

pub use schema::{Config, GatewayConfig, MailConfig, WizardConfig};

#[cfg(test)]
pub(crate) use schema::ScopedEnv;
