mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Loads the configuration from `CONFIG_PATH`, falling back to `config.yml`.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from(config_path).await
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let config = parse(&config_str)?;

    Ok(config)
}

/// Parses and validates a YAML document.
pub fn parse(yaml: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.api.endpoint.trim().is_empty() {
            return Err(Error::config("api.endpoint must not be empty"));
        }
        if self.api.dify_api_key.trim().is_empty() {
            return Err(Error::config("api.dify_api_key must not be empty"));
        }

        if self.mail.smtp_server.is_empty()
            || self.mail.smtp_username.is_empty()
            || self.mail.smtp_password.is_empty()
        {
            return Err(Error::config(
                "mail configuration is incomplete: smtp_server, smtp_username and smtp_password are required",
            ));
        }

        validate_log_level(&self.logging.level)?;

        if self.rate_limit.enabled
            && !(self.rate_limit.requests_per_second.is_finite()
                && self.rate_limit.requests_per_second > 0.0)
        {
            return Err(Error::config(format!(
                "rate_limit.requests_per_second must be positive when enabled, got {}",
                self.rate_limit.requests_per_second
            )));
        }

        if self.timeouts.api_request == 0 {
            return Err(Error::config("timeouts.api_request must be at least 1 second"));
        }

        Ok(())
    }
}

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            Error::config(format!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            ))
        })?;
    Ok(())
}
