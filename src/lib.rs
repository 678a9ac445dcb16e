//! Fuel calculation for launch/land routes, served through a serializing actor.
//!
//! The workspace is split by concern; this crate re-exports the pieces so
//! front-ends (the CLI today) depend on a single facade.

pub use fuel_config as config;
pub use fuel_export as export;
pub use fuel_propulsion as propulsion;
pub use fuel_server as server;

pub use fuel_core::{Body, CoreError, FuelCoefficients, ManeuverKind, constants};
pub use fuel_propulsion::{FuelError, LegFuel, Maneuver, Route, calculate, calculate_legs, fuel_for};
pub use fuel_server::{ActorError, CallRecord, CalculatorHandle, CallerId};
