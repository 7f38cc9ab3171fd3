use aerodesign::components::Supercharger;
use aerodesign::systems::{
    air_properties_at, engine_power_at, propulsion::apply_diminishing_returns,
};
use approx::assert_relative_eq;

#[test]
fn test_density_decreases_through_troposphere() {
    let mut previous = air_properties_at(0.0).density;
    for step in 1..=44 {
        let density = air_properties_at(step as f64 * 250.0).density;
        assert!(density <= previous, "density rose at {} m", step * 250);
        previous = density;
    }
}

#[test]
fn test_naturally_aspirated_sea_level_power() {
    for base in [100.0, 600.0, 999.0, 1000.0] {
        assert_relative_eq!(
            engine_power_at(base, 0.0, &Supercharger::NaturallyAspirated),
            base,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_diminishing_returns_bounds() {
    for raw in [1000.5, 1200.0, 1800.0, 2500.0, 4000.0, 10_000.0] {
        let adjusted = apply_diminishing_returns(raw);
        assert!(adjusted <= raw, "{raw} HP grew to {adjusted}");
        assert!(adjusted >= 1000.0, "{raw} HP fell to {adjusted}");
    }
}

#[test]
fn test_supercharger_variants_at_altitude() {
    let base = 800.0;
    let altitude = 6000.0;
    let natural = engine_power_at(base, altitude, &Supercharger::NaturallyAspirated);
    let single = engine_power_at(
        base,
        altitude,
        &Supercharger::SingleAltitudeRated {
            optimal_altitude: 4000.0,
            power_modifier: 1.0,
        },
    );
    let multi = engine_power_at(
        base,
        altitude,
        &Supercharger::MultiAltitudeRated {
            optimal_altitudes: vec![2000.0, 6000.0],
            power_modifier: 1.0,
        },
    );

    assert!(natural < single);
    assert!(single < multi);
    assert_relative_eq!(multi, base);
}
