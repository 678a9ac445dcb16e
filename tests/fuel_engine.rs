use fuel_calculator::{Body, FuelError, Maneuver, ManeuverKind, Route, calculate, fuel_for};

fn apollo() -> Route {
    Route::new(vec![
        Maneuver::launch(Body::Earth),
        Maneuver::land(Body::Moon),
        Maneuver::launch(Body::Moon),
        Maneuver::land(Body::Earth),
    ])
}

#[test]
fn seed_regressions() {
    assert_eq!(
        calculate(28_801, &Route::new(vec![Maneuver::land(Body::Earth)])).unwrap(),
        13_447
    );
    assert_eq!(calculate(28_801, &apollo()).unwrap(), 51_951);

    let mars = Route::new(vec![
        Maneuver::launch(Body::Earth),
        Maneuver::land(Body::Mars),
        Maneuver::launch(Body::Mars),
        Maneuver::land(Body::Earth),
    ]);
    assert_eq!(calculate(14_606, &mars).unwrap(), 33_482);

    let passenger = Route::new(vec![
        Maneuver::launch(Body::Earth),
        Maneuver::land(Body::Moon),
        Maneuver::launch(Body::Moon),
        Maneuver::land(Body::Mars),
        Maneuver::launch(Body::Mars),
        Maneuver::land(Body::Earth),
    ]);
    assert_eq!(calculate(75_432, &passenger).unwrap(), 212_283);
}

#[test]
fn explicit_gravity_matches_body_lookup() {
    let by_value = Route::new(vec![Maneuver::new(ManeuverKind::Land, 9.807).unwrap()]);
    let by_body = Route::new(vec![Maneuver::land(Body::Earth)]);
    assert_eq!(
        calculate(28_801, &by_value).unwrap(),
        calculate(28_801, &by_body).unwrap()
    );
}

#[test]
fn single_leg_fuel_is_monotonic_in_mass() {
    for kind in [ManeuverKind::Launch, ManeuverKind::Land] {
        for body in Body::ALL {
            let route = Route::new(vec![Maneuver::at(kind, body)]);
            let mut previous = 0;
            for mass in (1..20_000).step_by(7).chain([50_000, 100_000, 1_000_000]) {
                let fuel = calculate(mass, &route).unwrap();
                assert!(
                    fuel >= previous,
                    "{kind} at {body}: mass {mass} needs {fuel} < {previous}"
                );
                previous = fuel;
            }
        }
    }
}

#[test]
fn concatenated_route_equals_sequential_processing() {
    let first = Route::new(vec![Maneuver::launch(Body::Earth), Maneuver::land(Body::Moon)]);
    let second = Route::new(vec![Maneuver::launch(Body::Moon), Maneuver::land(Body::Earth)]);
    let mass = 28_801_i64;

    // Fly `first`, then price `second` with every earlier fuel unit still aboard.
    let mut total = 0_u64;
    for leg in first.iter().chain(second.iter()) {
        let coefficients = leg.kind().coefficients();
        let carry = mass as u64 + total;
        total += fuel_for(carry, leg.gravity(), coefficients.coefficient, coefficients.surplus)
            .expect("fits in u64");
    }

    assert_eq!(calculate(mass, &first.clone().concat(&second)).unwrap(), total);
    assert_eq!(calculate(mass, &first.concat(&second)).unwrap(), 51_951);
}

#[test]
fn duplicate_legs_are_counted_independently() {
    let once = calculate(10_000, &Route::new(vec![Maneuver::land(Body::Mars)])).unwrap();
    let twice = calculate(
        10_000,
        &Route::new(vec![Maneuver::land(Body::Mars), Maneuver::land(Body::Mars)]),
    )
    .unwrap();
    assert!(twice > 2 * once, "second leg must carry the first leg's fuel");
}

#[test]
fn fuel_for_terminates_and_is_non_negative() {
    for mass in [1_u64, 2, 10, 999, 123_456, 10_000_000] {
        for gravity in [0.01, 1.0, 9.807, 20.0, 23.0] {
            for (coefficient, surplus) in [(0.042, 33), (0.033, 42), (0.5, 1), (0.001, 1)] {
                if gravity * coefficient >= 1.0 {
                    continue;
                }
                let k = gravity * coefficient;
                let fuel = fuel_for(mass, gravity, coefficient, surplus).expect("fits in u64");
                // Each increment is at most k times the previous mass.
                let bound = mass as f64 * k / (1.0 - k) + 1.0;
                assert!(fuel as f64 <= bound, "runaway fuel {fuel} > {bound}");
            }
        }
    }
}

#[test]
fn oversized_totals_are_rejected() {
    let long = Route::new(vec![Maneuver::launch(Body::Earth); 80]);
    assert_eq!(calculate(1_000, &long), Err(FuelError::FuelOverflow));
    assert_eq!(
        calculate(i64::MAX, &Route::new(vec![Maneuver::launch(Body::Earth); 3])),
        Err(FuelError::FuelOverflow)
    );
    // The largest mass still prices a single leg.
    assert!(calculate(i64::MAX, &Route::new(vec![Maneuver::land(Body::Moon)])).is_ok());
}

#[test]
fn validation_errors() {
    assert_eq!(calculate(0, &apollo()), Err(FuelError::InvalidMass(0)));
    assert_eq!(calculate(-1, &apollo()), Err(FuelError::InvalidMass(-1)));
    assert_eq!(calculate(100, &Route::default()), Err(FuelError::EmptyRoute));
    assert_eq!(
        Maneuver::new(ManeuverKind::Launch, 0.0),
        Err(FuelError::InvalidGravity(0.0))
    );
}
