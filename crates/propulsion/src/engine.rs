//! Fuel pricing for a mass flown along a route.
//!
//! Each maneuver burns `floor(mass * gravity * coefficient) - surplus`, and that
//! fuel must itself be lifted, so the increment is fed back in as the next mass
//! until it no longer yields a positive amount. Across a route the vehicle keeps
//! carrying the fuel priced for earlier legs.

use serde::Serialize;
use tracing::debug;

use crate::{FuelError, Maneuver, Route};

/// Fuel attributed to one leg of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegFuel {
    pub maneuver: Maneuver,
    /// Mass the leg was priced against: base mass plus fuel of all prior legs.
    pub carry_mass: u64,
    pub fuel: u64,
}

/// Fuel for a single maneuver, including the fuel needed to carry that fuel.
///
/// Terminates for any `gravity * coefficient < 1` with a positive surplus. Outside
/// that range the loop stops as soon as an increment fails to shrink. Returns
/// `None` when the total does not fit in a `u64`.
pub fn fuel_for(current_mass: u64, gravity: f64, coefficient: f64, surplus: u64) -> Option<u64> {
    let mut mass = current_mass;
    let mut total: u64 = 0;
    loop {
        // Float-to-int casts saturate, and NaN becomes 0.
        let raw = (mass as f64 * gravity * coefficient).floor() as u64;
        if raw <= surplus {
            return Some(total);
        }
        let increment = raw - surplus;
        total = total.checked_add(increment)?;
        if increment >= mass {
            return Some(total);
        }
        mass = increment;
    }
}

/// Total fuel for `mass` flown along `route`.
pub fn calculate(mass: i64, route: &Route) -> Result<u64, FuelError> {
    calculate_legs(mass, route)?
        .iter()
        .try_fold(0_u64, |total, leg| total.checked_add(leg.fuel))
        .ok_or(FuelError::FuelOverflow)
}

/// Per-leg breakdown of [`calculate`]; the fuel values sum to its total.
pub fn calculate_legs(mass: i64, route: &Route) -> Result<Vec<LegFuel>, FuelError> {
    if mass <= 0 {
        return Err(FuelError::InvalidMass(mass));
    }
    if route.is_empty() {
        return Err(FuelError::EmptyRoute);
    }
    for maneuver in route {
        if maneuver.gravity() * maneuver.kind().coefficients().coefficient >= 1.0 {
            return Err(FuelError::DivergentManeuver {
                kind: maneuver.kind(),
                gravity: maneuver.gravity(),
            });
        }
    }

    let base = mass as u64;
    let mut total: u64 = 0;
    let mut legs = Vec::with_capacity(route.len());
    for maneuver in route {
        let carry = base.checked_add(total).ok_or(FuelError::FuelOverflow)?;
        let coefficients = maneuver.kind().coefficients();
        let fuel = fuel_for(
            carry,
            maneuver.gravity(),
            coefficients.coefficient,
            coefficients.surplus,
        )
        .ok_or(FuelError::FuelOverflow)?;
        debug!(
            kind = %maneuver.kind(),
            gravity = maneuver.gravity(),
            carry_mass = carry,
            fuel,
            "priced leg"
        );
        legs.push(LegFuel {
            maneuver: *maneuver,
            carry_mass: carry,
            fuel,
        });
        total = total.checked_add(fuel).ok_or(FuelError::FuelOverflow)?;
    }
    Ok(legs)
}
