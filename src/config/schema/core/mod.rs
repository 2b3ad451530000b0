mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;
mod types;

pub use types::Config;

#[cfg(test)]
pub(crate) use test_env::ScopedEnv;
