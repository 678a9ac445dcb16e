use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::fuel;
use crate::{CoreError, normalize_token};

/// The two maneuvers a vehicle performs at a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManeuverKind {
    Launch,
    Land,
}

/// Consumption coefficient and fixed surplus applied per fuel increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelCoefficients {
    pub coefficient: f64,
    pub surplus: u64,
}

impl ManeuverKind {
    pub fn coefficients(self) -> FuelCoefficients {
        match self {
            ManeuverKind::Launch => FuelCoefficients {
                coefficient: fuel::launch::CONSUMPTION_COEFFICIENT,
                surplus: fuel::launch::SURPLUS,
            },
            ManeuverKind::Land => FuelCoefficients {
                coefficient: fuel::land::CONSUMPTION_COEFFICIENT,
                surplus: fuel::land::SURPLUS,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ManeuverKind::Launch => "launch",
            ManeuverKind::Land => "land",
        }
    }
}

impl fmt::Display for ManeuverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ManeuverKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "launch" => Ok(ManeuverKind::Launch),
            "land" => Ok(ManeuverKind::Land),
            _ => Err(CoreError::UnknownManeuverKind(s.to_string())),
        }
    }
}

/// Resolve a maneuver token to its coefficients.
pub fn coefficients_for_name(kind: &str) -> Result<FuelCoefficients, CoreError> {
    kind.parse::<ManeuverKind>().map(ManeuverKind::coefficients)
}
