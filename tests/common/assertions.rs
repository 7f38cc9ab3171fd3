use aerodesign::components::{EquilibriumResult, PerformanceRecord};

/// Assert that an equilibrium result lies inside the scan band and is finite
#[track_caller]
pub fn assert_equilibrium_valid(result: &EquilibriumResult) {
    assert!(
        (50.0..=350.0).contains(&result.speed_ms),
        "Equilibrium speed {} m/s outside the scan band",
        result.speed_ms
    );
    assert!(result.drag.is_finite(), "Drag is not finite");
    assert!(result.thrust.is_finite(), "Thrust is not finite");
    assert!(result.thrust >= 0.0, "Thrust is negative");
    assert_eq!(result.rate_of_climb, 0.0);
}

/// Assert that every derived figure of a record is physically sensible
#[track_caller]
pub fn assert_record_valid(record: &PerformanceRecord) {
    assert_equilibrium_valid(&record.sea_level);
    assert_equilibrium_valid(&record.at_altitude);

    assert!(record.speed_sea_level_kmh > 0.0, "Sea-level speed must be positive");
    assert!(record.rate_of_climb >= 0.0, "Rate of climb is negative");
    assert!(
        (0.0..=15000.0).contains(&record.service_ceiling),
        "Ceiling {} m out of range",
        record.service_ceiling
    );
    assert!(record.range_km >= 0.0, "Range is negative");
    assert!(
        (12.0..=60.0).contains(&record.turn_time),
        "Turn time {} s not clamped",
        record.turn_time
    );
    assert!(
        record.reliability > 0.0 && record.reliability <= 1.0,
        "Reliability {} out of (0, 1]",
        record.reliability
    );

    // Mass bookkeeping
    assert!(record.weight.empty > 0.0);
    assert!(record.weight.fuel >= 0.0);
    assert!(record.weight.combat <= record.weight.gross);
}
