use aerodesign::components::{AircraftCategory, SolverConfig, Supercharger};
use aerodesign::systems::{
    performance::{ThrustDragBalance, golden_section_speed},
    performance_at, rate_of_climb_at, service_ceiling, turn_performance, PerformanceInputs,
};

use crate::common::{assert_equilibrium_valid, light_fighter_aero, light_fighter_inputs};

const NA: Supercharger = Supercharger::NaturallyAspirated;

#[test]
fn test_light_fighter_sea_level_speed() {
    let aero = light_fighter_aero();
    let inputs = light_fighter_inputs(&aero, &NA);
    let result = performance_at(0.0, &inputs, &SolverConfig::default());

    assert_equilibrium_valid(&result);
    assert!(
        result.speed_kmh > 400.0 && result.speed_kmh < 650.0,
        "light fighter reached {} km/h",
        result.speed_kmh
    );
}

#[test]
fn test_light_fighter_slower_at_8000_m() {
    let aero = light_fighter_aero();
    let inputs = light_fighter_inputs(&aero, &NA);
    let config = SolverConfig::default();

    let sea_level = performance_at(0.0, &inputs, &config);
    let high = performance_at(8000.0, &inputs, &config);
    assert!(high.speed_kmh < sea_level.speed_kmh);
}

#[test]
fn test_solvers_stay_in_bounds_across_designs() {
    let config = SolverConfig::default();
    let categories = [
        AircraftCategory::Fighter,
        AircraftCategory::CloseAirSupport,
        AircraftCategory::Bomber,
        AircraftCategory::Seaplane,
        AircraftCategory::Airship,
        AircraftCategory::General,
    ];

    for category in categories {
        let mut aero = light_fighter_aero();
        aero.category = category;
        for (weight, power_hp) in [(800.0, 3000.0), (2200.0, 1000.0), (12_000.0, 400.0)] {
            let inputs = PerformanceInputs {
                weight,
                power_hp,
                prop_efficiency: 0.8,
                aero: &aero,
                supercharger: &NA,
            };
            for altitude in [0.0, 3500.0, 9000.0] {
                assert_equilibrium_valid(&performance_at(altitude, &inputs, &config));
                assert!(rate_of_climb_at(altitude, &inputs, &config) >= 0.0);
            }

            let ceiling = service_ceiling(&inputs, &config);
            assert!(ceiling % 250.0 == 0.0 || ceiling == 15000.0);

            for speed in [50.0, 150.0, 350.0] {
                let turn = turn_performance(speed, 0.7, weight, &aero, config.turn_time_bounds);
                assert!((12.0..=60.0).contains(&turn.turn_time));
            }
        }
    }
}

#[test]
fn test_golden_section_agrees_with_scan() {
    let aero = light_fighter_aero();
    let supercharger = Supercharger::SingleAltitudeRated {
        optimal_altitude: 4000.0,
        power_modifier: 1.0,
    };
    let inputs = light_fighter_inputs(&aero, &supercharger);

    let scan = SolverConfig::default();
    let golden = SolverConfig::golden_section();
    for altitude in [0.0, 2000.0, 4000.0, 6000.0] {
        let scanned = performance_at(altitude, &inputs, &scan);
        let searched = performance_at(altitude, &inputs, &golden);
        assert!(
            (scanned.speed_ms - searched.speed_ms).abs() <= 1.0,
            "at {altitude} m: scan {} m/s, golden {} m/s",
            scanned.speed_ms,
            searched.speed_ms
        );

        let balance = ThrustDragBalance::new(altitude, &inputs);
        let (tolerance, max_iters) = (1e-4, 200);
        let speed = golden_section_speed(&balance, &golden, tolerance, max_iters).unwrap();
        assert_eq!(speed.fract(), 0.0);
    }
}
