mod core;
mod gateway;
mod mail;
mod wizard;

pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use mail::MailConfig;
pub use wizard::WizardConfig;

#[cfg(test)]
pub(crate) use self::core::ScopedEnv;
