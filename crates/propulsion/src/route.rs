use std::fmt;

use fuel_core::{Body, ManeuverKind};
use serde::{Deserialize, Serialize};

use crate::FuelError;

/// A single launch or land at a given gravitational acceleration.
///
/// Gravity is validated on construction (and on deserialization), so every
/// `Maneuver` in circulation has a positive, finite gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawManeuver")]
pub struct Maneuver {
    kind: ManeuverKind,
    gravity: f64,
}

#[derive(Deserialize)]
struct RawManeuver {
    kind: ManeuverKind,
    gravity: f64,
}

impl TryFrom<RawManeuver> for Maneuver {
    type Error = FuelError;

    fn try_from(raw: RawManeuver) -> Result<Self, Self::Error> {
        Maneuver::new(raw.kind, raw.gravity)
    }
}

impl Maneuver {
    /// Build a maneuver against an explicit gravity value.
    pub fn new(kind: ManeuverKind, gravity: f64) -> Result<Self, FuelError> {
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(FuelError::InvalidGravity(gravity));
        }
        Ok(Self { kind, gravity })
    }

    /// Build a maneuver at one of the tabulated bodies.
    pub fn at(kind: ManeuverKind, body: Body) -> Self {
        Self {
            kind,
            gravity: body.gravity(),
        }
    }

    pub fn launch(body: Body) -> Self {
        Self::at(ManeuverKind::Launch, body)
    }

    pub fn land(body: Body) -> Self {
        Self::at(ManeuverKind::Land, body)
    }

    pub fn kind(&self) -> ManeuverKind {
        self.kind
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.gravity)
    }
}

/// Ordered sequence of maneuvers; legs are flown in the order given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    legs: Vec<Maneuver>,
}

impl Route {
    pub fn new(legs: Vec<Maneuver>) -> Self {
        Self { legs }
    }

    /// Append every leg of `other` after this route's legs.
    pub fn concat(mut self, other: &Route) -> Route {
        self.legs.extend_from_slice(&other.legs);
        self
    }

    pub fn legs(&self) -> &[Maneuver] {
        &self.legs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Maneuver> {
        self.legs.iter()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl From<Vec<Maneuver>> for Route {
    fn from(legs: Vec<Maneuver>) -> Self {
        Self::new(legs)
    }
}

impl FromIterator<Maneuver> for Route {
    fn from_iter<I: IntoIterator<Item = Maneuver>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Maneuver;
    type IntoIter = std::slice::Iter<'a, Maneuver>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

/// Compact `kind:gravity` legs joined with `|`, e.g. `launch:9.807|land:1.62`.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, leg) in self.legs.iter().enumerate() {
            if idx > 0 {
                f.write_str("|")?;
            }
            write!(f, "{leg}")?;
        }
        Ok(())
    }
}
