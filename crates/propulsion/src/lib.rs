//! Launch/land maneuvers, routes, and the fuel engine that prices them.

mod engine;
mod route;

pub use engine::{LegFuel, calculate, calculate_legs, fuel_for};
pub use route::{Maneuver, Route};

use fuel_core::{CoreError, ManeuverKind};
use thiserror::Error;

/// Validation failures raised before any fuel is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelError {
    #[error("mass must be a positive integer, got {0}")]
    InvalidMass(i64),
    #[error("route must contain at least one maneuver")]
    EmptyRoute,
    #[error("gravity must be a positive finite number, got {0}")]
    InvalidGravity(f64),
    #[error("{kind} at gravity {gravity} never converges on a finite fuel amount")]
    DivergentManeuver { kind: ManeuverKind, gravity: f64 },
    #[error("fuel for this mass and route exceeds the representable range")]
    FuelOverflow,
    #[error(transparent)]
    Lookup(#[from] CoreError),
}
