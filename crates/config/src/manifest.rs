use std::path::Path;

use fuel_propulsion::Route;
use serde::Deserialize;

use crate::{ConfigError, LegInput, NormalizeError, load_record};

/// A batch of trips to price, loaded from YAML or TOML.
///
/// ```yaml
/// trips:
///   - caller: apollo-11
///     mass: 28801
///     route:
///       - launch: earth
///       - land: moon
///       - "launch:1.62"
///       - land: Earth
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TripManifest {
    pub trips: Vec<TripConfig>,
}

/// One trip: who asked, the starting mass, and the unnormalized legs.
#[derive(Debug, Clone, Deserialize)]
pub struct TripConfig {
    #[serde(default)]
    pub caller: Option<String>,
    pub mass: i64,
    #[serde(default)]
    pub route: Vec<LegInput>,
}

impl TripConfig {
    pub fn route(&self) -> Result<Route, NormalizeError> {
        crate::normalize_route(&self.route)
    }
}

/// Load a trip manifest; `.toml` files are read as TOML, everything else as YAML.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<TripManifest, ConfigError> {
    let manifest: TripManifest = load_record(path)?;
    if manifest.trips.is_empty() {
        return Err(ConfigError::Invalid("manifest contains no trips".to_string()));
    }
    Ok(manifest)
}
