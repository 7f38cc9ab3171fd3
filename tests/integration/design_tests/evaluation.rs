use aerodesign::components::{ComponentCatalog, ComponentKind, DesignSnapshot, SolverConfig};
use aerodesign::systems::estimate_range_km;
use aerodesign::{evaluate_design, DesignError};
use pretty_assertions::assert_eq;
use std::io::Write;

use crate::common::{
    assert_record_valid, floatplane_design, heavy_fighter_design, medium_bomber_design,
    STANDARD_CATALOG,
};

#[test]
fn test_catalog_designs_evaluate() {
    let config = SolverConfig::default();
    for snapshot in [
        DesignSnapshot::default(),
        heavy_fighter_design(),
        medium_bomber_design(),
        floatplane_design(),
    ] {
        let record = evaluate_design(&snapshot, &STANDARD_CATALOG, &config)
            .unwrap_or_else(|err| panic!("{} failed: {err}", snapshot.name));
        assert_record_valid(&record);
        assert!(record.speed_sea_level_kmh <= snapshot.target_speed);
        assert!(record.range_km <= snapshot.target_range);
    }
}

#[test]
fn test_range_recomputes_from_record() {
    let config = SolverConfig::default();
    let snapshot = medium_bomber_design();
    let record = evaluate_design(&snapshot, &STANDARD_CATALOG, &config).unwrap();

    let airframe = STANDARD_CATALOG.airframe(&snapshot.airframe).unwrap();
    let cap = snapshot.target_range.min(airframe.limits.max_range);
    let recomputed = estimate_range_km(&record.range_parameters, config.range_balance_divisor, cap);

    assert_eq!(recomputed, record.range_km);
}

#[test]
fn test_armament_and_life_support() {
    let config = SolverConfig::default();

    let bomber = evaluate_design(&medium_bomber_design(), &STANDARD_CATALOG, &config).unwrap();
    assert_eq!(
        bomber.offensive_armament,
        vec!["1x Internal Bomb Bay", "1x Rifle-Calibre Machine Gun"]
    );
    assert_eq!(bomber.defensive_armament, vec!["2x Defensive Gun Turret"]);

    // No oxygen system fitted
    let floatplane = evaluate_design(&floatplane_design(), &STANDARD_CATALOG, &config).unwrap();
    assert!(floatplane.service_ceiling <= 5000.0);
    assert!(floatplane.offensive_armament.is_empty());
}

#[test]
fn test_twin_engines_double_power() {
    let record =
        evaluate_design(&heavy_fighter_design(), &STANDARD_CATALOG, &SolverConfig::default())
            .unwrap();
    assert_eq!(record.total_power_hp, 2800.0);
}

#[test]
fn test_unknown_component_produces_no_record() {
    let config = SolverConfig::default();
    let cases = [
        (ComponentKind::Airframe, "biplane"),
        (ComponentKind::Wing, "delta"),
        (ComponentKind::Supercharger, "turbo_supercharger"),
    ];

    for (kind, key) in cases {
        let mut snapshot = DesignSnapshot::default();
        match kind {
            ComponentKind::Airframe => snapshot.airframe = key.to_string(),
            ComponentKind::Wing => snapshot.wing = key.to_string(),
            _ => snapshot.supercharger = key.to_string(),
        }

        match evaluate_design(&snapshot, &STANDARD_CATALOG, &config) {
            Err(DesignError::UnknownComponent {
                kind: found_kind,
                key: found_key,
            }) => {
                assert_eq!(found_kind, kind);
                assert_eq!(found_key, key);
            }
            other => panic!("expected an unknown {kind}, got {other:?}"),
        }
    }
}

#[test]
fn test_snapshot_json_round_trip_evaluates_identically() {
    let config = SolverConfig::default();
    let snapshot = heavy_fighter_design();
    let restored = DesignSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();

    assert_eq!(restored, snapshot);
    assert_eq!(
        evaluate_design(&restored, &STANDARD_CATALOG, &config).unwrap(),
        evaluate_design(&snapshot, &STANDARD_CATALOG, &config).unwrap()
    );
}

#[test]
fn test_catalog_from_file_evaluates() {
    let yaml = r#"
airframes:
  trainer:
    name: Trainer
    category: general
    weight: 700
    cost: 5000
    cd_0: 0.03
    cl_max: 1.5
    limits:
      max_speed: 350
      max_range: 900
      max_ceiling: 6000
structures:
  wood:
    name: Wood
    weight_factor: 1.0
    cost_factor: 1.0
    g_limit: 6
wings:
  plain:
    name: Plain Wing
    wing_area: 16
    aspect_ratio: 7
    oswald_efficiency: 0.8
    weight: 150
    cost: 1000
engines:
  flat_four:
    name: Flat Four
    power: 180
    weight: 130
    cost: 2000
superchargers:
  none:
    name: None
equipment: {}
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let catalog = ComponentCatalog::new(aerodesign::components::CatalogSource::File(
        file.path().to_path_buf(),
    ))
    .unwrap();

    let snapshot = DesignSnapshot {
        name: "Trainer".to_string(),
        airframe: "trainer".to_string(),
        structure: "wood".to_string(),
        wing: "plain".to_string(),
        engine: "flat_four".to_string(),
        engine_count: 1,
        supercharger: "none".to_string(),
        equipment: Vec::new(),
        target_speed: 300.0,
        target_range: 600.0,
    };
    let record = evaluate_design(&snapshot, &catalog, &SolverConfig::default()).unwrap();

    assert_record_valid(&record);
    assert!(record.service_ceiling <= 5000.0);
    assert!(record.speed_sea_level_kmh <= 300.0);
}
