use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::gravity;
use crate::{CoreError, normalize_token};

/// Celestial bodies with a known surface gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Earth,
    Moon,
    Mars,
}

impl Body {
    pub const ALL: [Body; 3] = [Body::Earth, Body::Moon, Body::Mars];

    /// Surface gravitational acceleration of the body.
    pub fn gravity(self) -> f64 {
        match self {
            Body::Earth => gravity::EARTH,
            Body::Moon => gravity::MOON,
            Body::Mars => gravity::MARS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Earth => "earth",
            Body::Moon => "moon",
            Body::Mars => "mars",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = CoreError;

    /// Case-insensitive; a leading `:` is accepted (`":Moon"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Body::ALL
            .into_iter()
            .find(|body| body.name() == normalized)
            .ok_or_else(|| CoreError::UnknownBody(s.to_string()))
    }
}

/// Resolve a body name to its gravity.
pub fn gravity_for_name(name: &str) -> Result<f64, CoreError> {
    name.parse::<Body>().map(Body::gravity)
}
