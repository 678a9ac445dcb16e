//! Input normalization, trip manifests, and service configuration for the Fuel Calculator.
//!
//! Everything callers hand us in loose form (`"land:Earth"`, `{launch: 9.807}`,
//! `":moon"`) is resolved here into the canonical `Maneuver`/`Route` types before
//! it reaches the calculation actor.

mod leg;
mod manifest;
mod service;

pub use leg::{LegInput, NormalizeError, Target, normalize_route};
pub use manifest::{TripConfig, TripManifest, load_manifest};
pub use service::{LogFormat, ServiceConfig, load_service_config};

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Read a single record from a TOML file, or YAML for any other extension.
fn load_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(serde_yaml::from_str(&contents)?)
    }
}
