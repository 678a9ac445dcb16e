use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use fuel_core::{Body, CoreError, ManeuverKind};
use fuel_propulsion::{FuelError, Maneuver, Route};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a leg happens: a named body or a raw gravity override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "RawTarget")]
pub enum Target {
    Gravity(f64),
    Body(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Number(f64),
    Text(String),
}

impl From<RawTarget> for Target {
    fn from(raw: RawTarget) -> Self {
        match raw {
            RawTarget::Number(value) => Target::Gravity(value),
            RawTarget::Text(text) => Target::from(text.as_str()),
        }
    }
}

impl Target {
    fn gravity(&self) -> Result<f64, NormalizeError> {
        match self {
            Target::Gravity(value) => Ok(*value),
            Target::Body(name) => Ok(name.parse::<Body>()?.gravity()),
        }
    }
}

/// Numeric tokens become gravity overrides, anything else a body name.
impl From<&str> for Target {
    fn from(token: &str) -> Self {
        let trimmed = token.trim();
        match trimmed.parse::<f64>() {
            Ok(value) => Target::Gravity(value),
            Err(_) => Target::Body(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Gravity(value) => write!(f, "{value}"),
            Target::Body(name) => f.write_str(name),
        }
    }
}

/// A route leg as supplied by a caller, before normalization.
///
/// Manifests may spell a leg as the `kind:target` shorthand string or as a
/// one-entry map such as `{land: earth}` / `{launch: 9.807}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawLeg")]
pub struct LegInput {
    pub kind: String,
    pub target: Target,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLeg {
    Shorthand(String),
    Keyword(BTreeMap<String, Target>),
}

impl TryFrom<RawLeg> for LegInput {
    type Error = NormalizeError;

    fn try_from(raw: RawLeg) -> Result<Self, Self::Error> {
        match raw {
            RawLeg::Shorthand(text) => text.parse(),
            RawLeg::Keyword(map) => {
                if map.len() != 1 {
                    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                    return Err(NormalizeError::Malformed(keys.join(",")));
                }
                let (kind, target) = map.into_iter().next().ok_or_else(|| {
                    NormalizeError::Malformed(String::new())
                })?;
                Ok(LegInput::new(kind, target))
            }
        }
    }
}

/// Failures turning caller input into a `Route`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("malformed leg '{0}', expected <launch|land>:<body|gravity>")]
    Malformed(String),
    #[error(transparent)]
    Lookup(#[from] CoreError),
    #[error(transparent)]
    Fuel(#[from] FuelError),
}

impl LegInput {
    pub fn new(kind: impl Into<String>, target: Target) -> Self {
        Self {
            kind: kind.into(),
            target,
        }
    }

    /// Resolve kind and target against the fixed tables.
    pub fn to_maneuver(&self) -> Result<Maneuver, NormalizeError> {
        let kind: ManeuverKind = self.kind.parse()?;
        let gravity = self.target.gravity()?;
        Ok(Maneuver::new(kind, gravity)?)
    }
}

impl FromStr for LegInput {
    type Err = NormalizeError;

    /// Parse the `kind:target` shorthand, e.g. `land:Earth` or `launch:3.711`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, target) = s
            .trim()
            .trim_start_matches(':')
            .split_once(':')
            .ok_or_else(|| NormalizeError::Malformed(s.to_string()))?;
        if kind.trim().is_empty() || target.trim().is_empty() {
            return Err(NormalizeError::Malformed(s.to_string()));
        }
        Ok(LegInput::new(kind.trim(), Target::from(target)))
    }
}

impl fmt::Display for LegInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.target)
    }
}

/// Normalize every leg, failing on the first leg that does not resolve.
pub fn normalize_route(legs: &[LegInput]) -> Result<Route, NormalizeError> {
    legs.iter().map(LegInput::to_maneuver).collect()
}
