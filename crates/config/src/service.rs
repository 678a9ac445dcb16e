use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, load_record};

/// Log output format for binaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Runtime settings for the calculation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Bounded mailbox size; senders wait once this many requests are queued.
    pub mailbox_capacity: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 64,
            log_filter: "info".to_string(),
            log_format: LogFormat::Plain,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid(
                "mailbox_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a service config; `.toml` is read as TOML, anything else as YAML.
pub fn load_service_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = load_record(path)?;
    config.validate()?;
    Ok(config)
}
