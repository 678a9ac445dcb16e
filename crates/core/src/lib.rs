//! Core constants, celestial bodies, and maneuver kinds shared across the Fuel Calculator workspace.

mod body;
mod maneuver;

pub use body::{Body, gravity_for_name};
pub use maneuver::{FuelCoefficients, ManeuverKind, coefficients_for_name};

use thiserror::Error;

/// Fixed physical constants. Units are the calculator's own mass/distance/time units.
pub mod constants {
    /// Surface gravitational acceleration per supported body (m/s²).
    pub mod gravity {
        /// Earth.
        pub const EARTH: f64 = 9.807;
        /// Earth's moon.
        pub const MOON: f64 = 1.62;
        /// Mars.
        pub const MARS: f64 = 3.711;
    }

    /// Consumption coefficient and surplus per maneuver kind.
    pub mod fuel {
        pub mod launch {
            pub const CONSUMPTION_COEFFICIENT: f64 = 0.042;
            pub const SURPLUS: u64 = 33;
        }

        pub mod land {
            pub const CONSUMPTION_COEFFICIENT: f64 = 0.033;
            pub const SURPLUS: u64 = 42;
        }
    }
}

/// Lookup failures for identifiers outside the fixed tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown body '{0}', expected one of earth, moon, mars")]
    UnknownBody(String),
    #[error("unknown maneuver kind '{0}', expected launch or land")]
    UnknownManeuverKind(String),
}

/// Strip whitespace and an optional leading `:` so `":earth"` and `" Earth "` normalize alike.
pub(crate) fn normalize_token(token: &str) -> String {
    let trimmed = token.trim();
    trimmed
        .strip_prefix(':')
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}
